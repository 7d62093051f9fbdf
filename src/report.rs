use emptiness_core::{
    report::{self, EmptyProperties},
    value::ToValue,
};

/**
Collect the names of the fields in `model` that are null or empty text.

Only the fields of `model` itself are checked. A field holding a record or collection is never reported, even if it has no fields or elements.

If `model` is null then this method returns `None`, so a missing model can be told apart from a model with no empty fields. If `model` isn't a record then it has no fields to report.
*/
pub fn empty_properties(model: impl ToValue) -> Option<EmptyProperties> {
    let model = model.to_value();
    let kind = model.kind().as_str();

    let properties = report::empty_properties(&model);

    match properties {
        Some(ref properties) => {
            let empty = properties.len();

            emit::debug!("found {empty} empty properties in {kind}", empty, kind);
        }
        None => {
            emit::debug!("no model to check for empty properties");
        }
    }

    properties
}

/**
Describe the fields in `model` that are null or empty text.

When some fields are empty this returns a message like `"Empty or null properties: name, email"`, listing the fields in the order the record enumerates them. When no fields are empty, or `model` isn't a record, it returns `"All properties have values."`.

If `model` is null then this method returns `None`.
*/
pub fn describe_empty_properties(model: impl ToValue) -> Option<String> {
    empty_properties(model).map(|properties| properties.to_string())
}
