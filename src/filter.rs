//! Filter Form Reader
//!
//! Turns the filter form into an urlencoded query, and resets it.

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use wasm_bindgen::JsCast;

use crate::error::{MealsError, MealsResult};

/// Everything except the characters `application/x-www-form-urlencoded` leaves alone
const FORM_ENCODE_SET: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'*')
    .remove(b'-')
    .remove(b'.')
    .remove(b'_');

/// Ordered form field name/value pairs
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormFields(Vec<(String, String)>);

/// Criteria read from the filter form, consumed by one refresh
pub type FilterCriteria = FormFields;

impl FormFields {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.0.push((name.into(), value.into()));
    }

    pub fn with(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.push(name, value);
        self
    }

    pub fn pairs(&self) -> &[(String, String)] {
        &self.0
    }

    #[cfg(test)]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.0.iter().find(|(n, _)| n == name).map(|(_, v)| v.as_str())
    }

    /// `name=value&...`, spaces as `+`
    pub fn to_query(&self) -> String {
        self.pairs()
            .iter()
            .map(|(name, value)| format!("{}={}", encode_component(name), encode_component(value)))
            .collect::<Vec<_>>()
            .join("&")
    }
}

fn encode_component(raw: &str) -> String {
    raw.split(' ')
        .map(|part| utf8_percent_encode(part, FORM_ENCODE_SET).to_string())
        .collect::<Vec<_>>()
        .join("+")
}

/// Snapshot of one form control, enough to decide whether it is submitted
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormControl {
    pub name: String,
    /// Lowercased `type` (`text`, `date`, `checkbox`, `select-one`, ...)
    pub kind: String,
    pub value: String,
    pub checked: bool,
    pub disabled: bool,
}

const SKIPPED_KINDS: &[&str] = &["submit", "button", "reset", "file", "image"];

/// Apply successful-control rules; values pass through unvalidated
pub fn serialize_controls(controls: &[FormControl]) -> FormFields {
    let mut fields = FormFields::new();
    for control in controls {
        if control.name.is_empty() || control.disabled {
            continue;
        }
        let kind = control.kind.as_str();
        if SKIPPED_KINDS.contains(&kind) {
            continue;
        }
        if (kind == "checkbox" || kind == "radio") && !control.checked {
            continue;
        }
        fields.push(control.name.clone(), control.value.replace("\r\n", "\n").replace('\n', "\r\n"));
    }
    fields
}

/// Source of filter criteria
pub trait FilterSource {
    fn read(&self) -> MealsResult<FilterCriteria>;

    /// Restore the form to its default (empty) values
    fn reset(&self) -> MealsResult<()>;
}

/// Filter form looked up by element id on every call
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DomFilterForm {
    form_id: String,
}

impl DomFilterForm {
    pub fn new(form_id: impl Into<String>) -> Self {
        Self { form_id: form_id.into() }
    }

    fn form(&self) -> MealsResult<web_sys::HtmlFormElement> {
        web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id(&self.form_id))
            .ok_or_else(|| MealsError::Dom(format!("#{}", self.form_id)))?
            .dyn_into::<web_sys::HtmlFormElement>()
            .map_err(|_| MealsError::Form(format!("#{} is not a form", self.form_id)))
    }
}

impl FilterSource for DomFilterForm {
    fn read(&self) -> MealsResult<FilterCriteria> {
        let elements = self.form()?.elements();
        let controls: Vec<FormControl> = (0..elements.length())
            .filter_map(|i| elements.item(i))
            .filter_map(|el| control_snapshot(&el))
            .collect();
        Ok(serialize_controls(&controls))
    }

    fn reset(&self) -> MealsResult<()> {
        self.form()?.reset();
        Ok(())
    }
}

fn control_snapshot(el: &web_sys::Element) -> Option<FormControl> {
    if let Some(input) = el.dyn_ref::<web_sys::HtmlInputElement>() {
        return Some(FormControl {
            name: input.name(),
            kind: input.type_().to_lowercase(),
            value: input.value(),
            checked: input.checked(),
            disabled: input.disabled(),
        });
    }
    if let Some(select) = el.dyn_ref::<web_sys::HtmlSelectElement>() {
        return Some(FormControl {
            name: select.name(),
            kind: select.type_(),
            value: select.value(),
            checked: false,
            disabled: select.disabled(),
        });
    }
    if let Some(area) = el.dyn_ref::<web_sys::HtmlTextAreaElement>() {
        return Some(FormControl {
            name: area.name(),
            kind: "textarea".to_string(),
            value: area.value(),
            checked: false,
            disabled: area.disabled(),
        });
    }
    None
}
