//! Struct, trait and enum rendering for generated classes.

use super::rust_ident;
use super::types::TypeRenderer;
use crate::error::CodegenError;
use crate::model::{
    ATTRIBUTE, CUSTOM_FIELDS, Equality, OutputClass, OutputType, Projection, TYPE_REFERENCE,
    TYPED_CUSTOM_FIELDS, TYPED_VARIANT_ATTRIBUTES, TypeKind,
};
use std::collections::{HashMap, HashSet};

/// Name of the enum over all generated variant-attributes classes.
pub const ANY_TYPED_VARIANT_ATTRIBUTES: &str = "AnyTypedVariantAttributes";

/// Maximum constructor arity before clippy's `too_many_arguments` fires.
const MAX_ARGUMENTS: usize = 7;

/// A field ready to be written out.
struct RenderedField {
    ident: String,
    ty: String,
    serde: String,
}

/// Renders the body of a custom-fields file.
///
/// # Errors
/// Returns `CodegenError` if two fields or two nested modules of the unit
/// resolve to the same Rust identifier.
pub fn render_custom_fields(
    classes: &[OutputClass],
    types: &mut TypeRenderer<'_>,
) -> Result<String, CodegenError> {
    let type_reference = types.sdk(TYPE_REFERENCE);
    let custom_fields = types.sdk(CUSTOM_FIELDS);
    let mut output = String::new();

    output.push_str(&format!(
        "/// Typed projection of a custom-fields carrier.\n\
         pub trait {TYPED_CUSTOM_FIELDS} {{\n\
         \x20   /// Key of the custom-field type the fields belong to.\n\
         \x20   const TYPE_KEY: &'static str;\n\n\
         \x20   /// Returns the reference to the custom-field type.\n\
         \x20   fn type_reference(&self) -> &{type_reference};\n\
         }}\n\n"
    ));

    let mut modules: HashMap<String, &str> = HashMap::with_capacity(classes.len());
    for class in classes {
        let Projection::CustomFields { type_key } = &class.projection else {
            return Err(CodegenError::generation(format!(
                "class '{}' is not a custom fields projection",
                class.name
            )));
        };
        let record = class.typed_fields();
        let module = rust_ident(&class.name);
        if let Some(first) = modules.insert(module.clone(), &class.name) {
            return Err(CodegenError::generation(format!(
                "classes '{first}' and '{}' both render module '{module}'",
                class.name
            )));
        }

        let record_fields = rendered_fields(record, types)?;
        let name = &class.name;
        let fields_path = format!("{module}::{}", record.name);
        let key = type_key.escape_debug();

        output.push_str(&format!("/// Typed custom fields of type `{key}`.\n"));
        output.push_str("///\n");
        output.push_str("/// Keeps the raw carrier it was read from.\n");
        output.push_str("#[derive(Debug, Clone)]\n");
        output.push_str(&format!("pub struct {name} {{\n"));
        output.push_str("    /// Reference to the custom-field type.\n");
        output.push_str(&format!("    pub type_: {type_reference},\n"));
        output.push_str("    /// Typed field values.\n");
        output.push_str(&format!("    pub fields: {fields_path},\n"));
        output.push_str(&format!("    raw: {custom_fields},\n"));
        output.push_str("}\n\n");

        output.push_str(&format!("impl {name} {{\n"));
        output.push_str(&constructor(
            name,
            &[
                ("type_", type_reference.to_string()),
                ("fields", fields_path.clone()),
                ("raw", custom_fields.to_string()),
            ],
            "    ",
        ));
        output.push_str("\n    /// Returns the raw custom fields.\n");
        output.push_str("    #[must_use]\n");
        output.push_str(&format!(
            "    pub const fn raw(&self) -> &{custom_fields} {{\n        &self.raw\n    }}\n\n"
        ));
        output.push_str("    /// Consumes the projection, returning the raw custom fields.\n");
        output.push_str("    #[must_use]\n");
        output.push_str(&format!(
            "    pub fn into_raw(self) -> {custom_fields} {{\n        self.raw\n    }}\n"
        ));
        output.push_str("}\n\n");

        output.push_str(&format!("impl {TYPED_CUSTOM_FIELDS} for {name} {{\n"));
        output.push_str(&format!("    const TYPE_KEY: &'static str = {type_key:?};\n\n"));
        output.push_str(&format!(
            "    fn type_reference(&self) -> &{type_reference} {{\n        &self.type_\n    }}\n"
        ));
        output.push_str("}\n\n");

        output.push_str(&format!("impl AsRef<{custom_fields}> for {name} {{\n"));
        output.push_str(&format!(
            "    fn as_ref(&self) -> &{custom_fields} {{\n        &self.raw\n    }}\n"
        ));
        output.push_str("}\n\n");

        output.push_str(&format!("impl From<{name}> for {custom_fields} {{\n"));
        output.push_str(&format!(
            "    fn from(typed: {name}) -> Self {{\n        typed.raw\n    }}\n"
        ));
        output.push_str("}\n\n");

        output.push_str(&format!("impl TryFrom<&{custom_fields}> for {name} {{\n"));
        output.push_str("    type Error = serde_json::Error;\n\n");
        output.push_str(&format!(
            "    fn try_from(raw: &{custom_fields}) -> Result<Self, Self::Error> {{\n"
        ));
        output.push_str("        let value = serde_json::to_value(raw)?;\n");
        output.push_str("        let fields = value\n");
        output.push_str("            .get(\"fields\")\n");
        output.push_str("            .cloned()\n");
        output.push_str(
            "            .unwrap_or_else(|| serde_json::Value::Object(serde_json::Map::new()));\n",
        );
        output.push_str("        Ok(Self {\n");
        output.push_str("            type_: serde_json::from_value(value[\"type\"].clone())?,\n");
        output.push_str("            fields: serde_json::from_value(fields)?,\n");
        output.push_str("            raw: raw.clone(),\n");
        output.push_str("        })\n");
        output.push_str("    }\n");
        output.push_str("}\n\n");

        output.push_str(&format!("/// Nested record of [`{name}`].\n"));
        output.push_str(&format!("pub mod {module} {{\n"));
        output.push_str("    use super::*;\n\n");
        output.push_str(&format!("    /// Field values of type `{key}`.\n"));
        render_struct(&mut output, record, &record_fields, true, "    ");
        output.push_str("}\n\n");
    }

    Ok(output)
}

/// Renders the body of a variant-attributes file.
///
/// # Errors
/// Returns `CodegenError` if two fields of a class resolve to the same Rust
/// identifier.
pub fn render_variant_attributes(
    classes: &[OutputClass],
    types: &mut TypeRenderer<'_>,
) -> Result<String, CodegenError> {
    let attribute = types.sdk(ATTRIBUTE);
    let mut output = String::new();

    output.push_str(&format!(
        "/// Typed projection of a product variant's attributes.\n\
         pub trait {TYPED_VARIANT_ATTRIBUTES} {{\n\
         \x20   /// Id of the product type the attributes belong to.\n\
         \x20   fn product_type_id(&self) -> &'static str;\n\
         }}\n\n"
    ));

    output.push_str("/// Deserializes raw variant attributes into a typed attribute set.\n");
    output.push_str("///\n");
    output.push_str("/// # Errors\n");
    output.push_str("/// Returns an error if an attribute value does not fit its typed field.\n");
    output.push_str(&format!(
        "pub fn from_attributes<T>(attributes: &[{attribute}]) -> Result<T, serde_json::Error>\n"
    ));
    output.push_str("where\n");
    output.push_str(&format!(
        "    T: {TYPED_VARIANT_ATTRIBUTES} + serde::de::DeserializeOwned,\n"
    ));
    output.push_str("{\n");
    output.push_str("    let object = attributes\n");
    output.push_str("        .iter()\n");
    output.push_str("        .map(|attribute| {\n");
    output.push_str("            serde_json::to_value(&attribute.value)\n");
    output.push_str("                .map(|value| (attribute.name.clone(), value))\n");
    output.push_str("        })\n");
    output.push_str("        .collect::<Result<serde_json::Map<_, _>, _>>()?;\n");
    output.push_str("    serde_json::from_value(serde_json::Value::Object(object))\n");
    output.push_str("}\n\n");

    let incomparable = without_equality(classes);
    let mut ids = Vec::with_capacity(classes.len());
    for class in classes {
        let Projection::VariantAttributes { product_type_id } = &class.projection else {
            return Err(CodegenError::generation(format!(
                "class '{}' is not a variant attributes projection",
                class.name
            )));
        };
        let fields = rendered_fields(class, types)?;
        let name = &class.name;

        output.push_str(&format!(
            "/// Typed attributes of product type `{}`.\n",
            product_type_id.escape_debug()
        ));
        let comparable = !incomparable.contains(class.name.as_str());
        render_struct(&mut output, class, &fields, comparable, "");

        output.push_str(&format!("impl {TYPED_VARIANT_ATTRIBUTES} for {name} {{\n"));
        output.push_str(&format!(
            "    fn product_type_id(&self) -> &'static str {{\n        {product_type_id:?}\n    }}\n"
        ));
        output.push_str("}\n\n");

        ids.push((name.as_str(), product_type_id.as_str()));
    }

    output.push_str("/// Any generated variant attributes type.\n");
    output.push_str("#[derive(Debug, Clone)]\n");
    output.push_str(&format!("pub enum {ANY_TYPED_VARIANT_ATTRIBUTES} {{\n"));
    for (name, _) in &ids {
        output.push_str(&format!("    /// See [`{name}`].\n"));
        output.push_str(&format!("    {name}({name}),\n"));
    }
    output.push_str("}\n\n");

    output.push_str(&format!("impl {ANY_TYPED_VARIANT_ATTRIBUTES} {{\n"));
    output.push_str("    /// Deserializes raw attributes by product type id.\n");
    output.push_str("    ///\n");
    output.push_str("    /// Returns `None` for a product type without a generated type.\n");
    output.push_str("    ///\n");
    output.push_str("    /// # Errors\n");
    output.push_str(
        "    /// Returns an error if an attribute value does not fit its typed field.\n",
    );
    output.push_str("    pub fn from_attributes(\n");
    output.push_str("        product_type_id: &str,\n");
    output.push_str(&format!("        attributes: &[{attribute}],\n"));
    output.push_str("    ) -> Result<Option<Self>, serde_json::Error> {\n");
    output.push_str("        match product_type_id {\n");
    for (name, id) in &ids {
        output.push_str(&format!(
            "            {id:?} => from_attributes(attributes).map(|typed| Some(Self::{name}(typed))),\n"
        ));
    }
    output.push_str("            _ => Ok(None),\n");
    output.push_str("        }\n");
    output.push_str("    }\n\n");

    output.push_str("    /// Returns the wrapped attributes as a trait object.\n");
    output.push_str("    #[must_use]\n");
    output.push_str(&format!(
        "    pub fn as_typed(&self) -> &dyn {TYPED_VARIANT_ATTRIBUTES} {{\n"
    ));
    output.push_str("        match self {\n");
    for (name, _) in &ids {
        output.push_str(&format!("            Self::{name}(typed) => typed,\n"));
    }
    output.push_str("        }\n");
    output.push_str("    }\n");
    output.push_str("}\n");

    Ok(output)
}

/// Returns the classes of a unit that cannot derive `PartialEq`.
///
/// Markers have no equality, and neither has a class holding a field of
/// such a class, directly or inside a set.
fn without_equality(classes: &[OutputClass]) -> HashSet<&str> {
    let mut names: HashSet<&str> = classes
        .iter()
        .filter(|class| class.equality == Equality::Marker)
        .map(|class| class.name.as_str())
        .collect();

    loop {
        let before = names.len();
        for class in classes {
            if !names.contains(class.name.as_str())
                && class.fields.iter().any(|field| mentions(&field.ty, &names))
            {
                names.insert(class.name.as_str());
            }
        }
        if names.len() == before {
            return names;
        }
    }
}

/// Returns true if the type names one of the given classes.
fn mentions(ty: &OutputType, names: &HashSet<&str>) -> bool {
    match &ty.kind {
        TypeKind::Class(name) => names.contains(name.as_str()),
        TypeKind::Set(element) => mentions(element, names),
        _ => false,
    }
}

/// Resolves Rust identifiers and types for the fields of a class.
fn rendered_fields(
    class: &OutputClass,
    types: &mut TypeRenderer<'_>,
) -> Result<Vec<RenderedField>, CodegenError> {
    let mut seen: HashMap<String, &str> = HashMap::with_capacity(class.fields.len());
    let mut fields = Vec::with_capacity(class.fields.len());

    for field in &class.fields {
        let ident = rust_ident(&field.name);
        if let Some(first) = seen.insert(ident.clone(), &field.raw_name) {
            return Err(CodegenError::DuplicateField {
                class: class.name.clone(),
                name: ident,
                first: first.to_string(),
                second: field.raw_name.clone(),
            });
        }

        let raw = &field.raw_name;
        let serde = if field.ty.nullable {
            format!("#[serde(rename = {raw:?}, default, skip_serializing_if = \"Option::is_none\")]")
        } else {
            format!("#[serde(rename = {raw:?})]")
        };

        fields.push(RenderedField {
            ident,
            ty: types.field_type(&field.ty),
            serde,
        });
    }

    Ok(fields)
}

/// Writes a struct, its constants and its constructor.
fn render_struct(
    output: &mut String,
    class: &OutputClass,
    fields: &[RenderedField],
    comparable: bool,
    indent: &str,
) {
    let name = &class.name;

    output.push_str(&format!("{indent}{}\n", derives(class.equality, comparable)));
    if fields.is_empty() {
        output.push_str(&format!("{indent}pub struct {name} {{}}\n\n"));
    } else {
        output.push_str(&format!("{indent}pub struct {name} {{\n"));
        for field in fields {
            output.push_str(&format!("{indent}    {}\n", field.serde));
            output.push_str(&format!("{indent}    pub {}: {},\n", field.ident, field.ty));
        }
        output.push_str(&format!("{indent}}}\n\n"));
    }

    output.push_str(&format!("{indent}impl {name} {{\n"));
    for constant in &class.constants {
        output.push_str(&format!(
            "{indent}    /// Raw name of the `{}` attribute.\n",
            constant.value.escape_debug()
        ));
        output.push_str(&format!(
            "{indent}    pub const {}: &'static str = {:?};\n\n",
            constant.name, constant.value
        ));
    }
    let params: Vec<_> = fields
        .iter()
        .map(|field| (field.ident.as_str(), field.ty.clone()))
        .collect();
    output.push_str(&constructor(name, &params, &format!("{indent}    ")));
    output.push_str(&format!("{indent}}}\n\n"));
}

/// Renders a `new` function taking every field in order.
fn constructor(name: &str, params: &[(&str, String)], indent: &str) -> String {
    let mut output = String::new();

    output.push_str(&format!("{indent}/// Creates a new `{name}`.\n"));
    output.push_str(&format!("{indent}#[must_use]\n"));
    if params.len() > MAX_ARGUMENTS {
        output.push_str(&format!("{indent}#[allow(clippy::too_many_arguments)]\n"));
    }

    let args: Vec<_> = params
        .iter()
        .map(|(ident, ty)| format!("{ident}: {ty}"))
        .collect();
    let idents: Vec<_> = params.iter().map(|(ident, _)| *ident).collect();

    output.push_str(&format!(
        "{indent}pub fn new({}) -> Self {{\n",
        args.join(", ")
    ));
    if idents.is_empty() {
        output.push_str(&format!("{indent}    Self {{}}\n"));
    } else {
        output.push_str(&format!("{indent}    Self {{ {} }}\n", idents.join(", ")));
    }
    output.push_str(&format!("{indent}}}\n"));

    output
}

/// Returns the derive line for an equality variant.
///
/// A structural class that is not `comparable` holds a type without
/// `PartialEq` and skips that derive.
const fn derives(equality: Equality, comparable: bool) -> &'static str {
    match (equality, comparable) {
        (Equality::Structural, true) => {
            "#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]"
        }
        (Equality::Structural, false) => "#[derive(Debug, Clone, Serialize, Deserialize)]",
        (Equality::Marker, _) => "#[derive(Debug, Clone, Default, Serialize, Deserialize)]",
    }
}
