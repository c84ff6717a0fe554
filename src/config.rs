//! Meals Configuration
//!
//! Explicitly constructed settings shared by the refresher and the views.

use std::str::FromStr;

use log::{info, warn, LevelFilter};

/// Which meal attribute a column shows
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnData {
    DateTime,
    Description,
    Calories,
}

impl FromStr for ColumnData {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "dateTime" => Ok(ColumnData::DateTime),
            "description" => Ok(ColumnData::Description),
            "calories" => Ok(ColumnData::Calories),
            other => Err(format!("unknown column {other:?}")),
        }
    }
}

impl ColumnData {
    fn title(self) -> &'static str {
        match self {
            ColumnData::DateTime => "Date/Time",
            ColumnData::Description => "Description",
            ColumnData::Calories => "Calories",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnKind {
    Data(ColumnData),
    /// Placeholder cell for the edit affordance
    Edit,
    /// Placeholder cell for the delete affordance
    Delete,
}

/// Static table column definition
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnDef {
    pub title: &'static str,
    pub kind: ColumnKind,
    /// Cell text for action columns
    pub default_content: Option<&'static str>,
    pub orderable: bool,
}

impl ColumnDef {
    pub const fn data(title: &'static str, data: ColumnData) -> Self {
        Self { title, kind: ColumnKind::Data(data), default_content: None, orderable: true }
    }

    pub const fn action(kind: ColumnKind, default_content: &'static str) -> Self {
        Self { title: "", kind, default_content: Some(default_content), orderable: false }
    }

    pub fn data_kind(&self) -> Option<ColumnData> {
        match self.kind {
            ColumnKind::Data(data) => Some(data),
            ColumnKind::Edit | ColumnKind::Delete => None,
        }
    }
}

/// Sort column index; rows are always ordered descending
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortOrder {
    pub column: usize,
}

/// Data columns in display order, parsed from `dateTime,description,...`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnList(Vec<ColumnData>);

impl Default for ColumnList {
    fn default() -> Self {
        Self(vec![ColumnData::DateTime, ColumnData::Description])
    }
}

impl FromStr for ColumnList {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let data = s
            .split(',')
            .map(str::parse)
            .collect::<Result<Vec<ColumnData>, _>>()?;
        if !data.contains(&ColumnData::DateTime) {
            return Err("dateTime column is required".to_string());
        }
        Ok(Self(data))
    }
}

impl ColumnList {
    /// Data columns followed by the edit and delete action columns
    pub fn definitions(&self) -> Vec<ColumnDef> {
        self.0
            .iter()
            .map(|&data| ColumnDef::data(data.title(), data))
            .chain([
                ColumnDef::action(ColumnKind::Edit, "Edit"),
                ColumnDef::action(ColumnKind::Delete, "Delete"),
            ])
            .collect()
    }

    /// Index of the date/time column, the one rows sort by
    pub fn order(&self) -> SortOrder {
        let column = self.0.iter().position(|&d| d == ColumnData::DateTime).unwrap_or(0);
        SortOrder { column }
    }
}

/// Date/time, description, edit, delete
pub fn default_columns() -> Vec<ColumnDef> {
    ColumnList::default().definitions()
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MealsConfig {
    /// Fixed resource path, trailing slash included
    pub resource_path: String,
    pub filter_form_id: String,
    pub table_id: String,
    pub columns: Vec<ColumnDef>,
    pub order: SortOrder,
    pub log_level: LevelFilter,
}

impl Default for MealsConfig {
    fn default() -> Self {
        Self {
            resource_path: "profile/meals/".to_string(),
            filter_form_id: "filter".to_string(),
            table_id: "datatable".to_string(),
            columns: default_columns(),
            order: ColumnList::default().order(),
            log_level: LevelFilter::Info,
        }
    }
}

impl MealsConfig {
    /// Build from a key lookup (e.g. `<body data-*>` attributes)
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        let mut resource_path: String = try_load(&lookup, "meals-url", defaults.resource_path);
        if !resource_path.ends_with('/') {
            resource_path.push('/');
        }
        let columns: ColumnList = try_load(&lookup, "columns", ColumnList::default());
        Self {
            resource_path,
            filter_form_id: try_load(&lookup, "filter-form-id", defaults.filter_form_id),
            table_id: try_load(&lookup, "table-id", defaults.table_id),
            columns: columns.definitions(),
            order: columns.order(),
            log_level: try_load(&lookup, "log-level", defaults.log_level),
        }
    }

    /// Read `data-*` attributes from the document body
    pub fn from_document() -> Self {
        let body = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.body());
        match body {
            Some(body) => Self::from_lookup(|key| body.get_attribute(&format!("data-{key}"))),
            None => {
                warn!("[Config] No document body, using defaults");
                Self::default()
            }
        }
    }

    /// URL of a single meal (used by delete)
    pub fn meal_url(&self, id: u32) -> String {
        format!("{}{}", self.resource_path, id)
    }
}

fn try_load<T>(lookup: &impl Fn(&str) -> Option<String>, key: &str, default: T) -> T
where
    T: FromStr + std::fmt::Debug,
    T::Err: std::fmt::Display,
{
    match lookup(key).filter(|v| !v.trim().is_empty()) {
        None => {
            info!("[Config] {key} not set, using default: {default:?}");
            default
        }
        Some(raw) => raw.trim().parse().unwrap_or_else(|e| {
            warn!("[Config] Invalid {key} value {raw:?}: {e}, using default");
            default
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_defaults() {
        let config = MealsConfig::from_lookup(|_| None);
        assert_eq!(config, MealsConfig::default());
        assert_eq!(config.columns.len(), 4);
        assert_eq!(config.columns[0].data_kind(), Some(ColumnData::DateTime));
        assert_eq!(config.columns[2].kind, ColumnKind::Edit);
        assert!(!config.columns[2].orderable);
        assert_eq!(config.columns[3].default_content, Some("Delete"));
        assert_eq!(config.order, SortOrder { column: 0 });
    }

    #[test]
    fn test_overrides_and_trailing_slash() {
        let attrs: HashMap<&str, &str> = [
            ("meals-url", "rest/admin/meals"),
            ("table-id", "meals"),
            ("log-level", "debug"),
        ]
        .into_iter()
        .collect();
        let config = MealsConfig::from_lookup(|k| attrs.get(k).map(|v| v.to_string()));

        assert_eq!(config.resource_path, "rest/admin/meals/");
        assert_eq!(config.table_id, "meals");
        assert_eq!(config.filter_form_id, "filter");
        assert_eq!(config.log_level, LevelFilter::Debug);
        assert_eq!(config.meal_url(5), "rest/admin/meals/5");
    }

    #[test]
    fn test_invalid_value_falls_back() {
        let config = MealsConfig::from_lookup(|k| (k == "log-level").then(|| "chatty".to_string()));
        assert_eq!(config.log_level, LevelFilter::Info);
    }

    #[test]
    fn test_columns_attribute_adds_calories_and_moves_sort() {
        let config = MealsConfig::from_lookup(|k| (k == "columns").then(|| "description, dateTime,calories".to_string()));
        let titles: Vec<&str> = config.columns.iter().map(|c| c.title).collect();
        assert_eq!(titles, vec!["Description", "Date/Time", "Calories", "", ""]);
        assert_eq!(config.columns[2].data_kind(), Some(ColumnData::Calories));
        assert_eq!(config.columns[4].kind, ColumnKind::Delete);
        assert_eq!(config.order, SortOrder { column: 1 });
    }

    #[test]
    fn test_columns_without_date_time_fall_back() {
        for raw in ["description,calories", "dateTime,weight"] {
            let config = MealsConfig::from_lookup(|k| (k == "columns").then(|| raw.to_string()));
            assert_eq!(config.columns, default_columns());
            assert_eq!(config.order, SortOrder { column: 0 });
        }
    }
}
