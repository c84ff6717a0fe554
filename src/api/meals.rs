//! Meal Endpoints
//!
//! Read, save and delete calls against the configured resource path.

use async_trait::async_trait;
use log::debug;

use super::{build_url, read_json, send};
use crate::config::MealsConfig;
use crate::error::MealsResult;
use crate::filter::FormFields;
use crate::models::{MealForm, MealTo};
use crate::refresher::MealSource;

const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded; charset=UTF-8";

/// `GET <path>[?query]`
pub async fn list_meals(resource_path: &str, query: Option<&str>) -> MealsResult<Vec<MealTo>> {
    let url = build_url(resource_path, query);
    debug!("[Api] GET {}", url);
    let response = send("GET", &url, None).await?;
    read_json(response).await
}

/// `DELETE <path><id>`
pub async fn delete_meal(config: &MealsConfig, id: u32) -> MealsResult<()> {
    let url = config.meal_url(id);
    debug!("[Api] DELETE {}", url);
    send("DELETE", &url, None).await?;
    Ok(())
}

/// Urlencoded body for create/update; empty `id` means create
pub fn meal_form_fields(form: &MealForm) -> FormFields {
    FormFields::new()
        .with("id", form.id.map(|id| id.to_string()).unwrap_or_default())
        .with("dateTime", form.date_time.as_str())
        .with("description", form.description.as_str())
        .with("calories", form.calories.as_str())
}

/// `POST <path>` with the editor form
pub async fn save_meal(config: &MealsConfig, form: &MealForm) -> MealsResult<()> {
    let body = meal_form_fields(form).to_query();
    debug!("[Api] POST {} ({})", config.resource_path, if form.is_new() { "create" } else { "update" });
    send("POST", &config.resource_path, Some((FORM_CONTENT_TYPE, &body))).await?;
    Ok(())
}

/// Meal source backed by the read endpoint
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpMealSource {
    resource_path: String,
}

impl HttpMealSource {
    pub fn new(config: &MealsConfig) -> Self {
        Self { resource_path: config.resource_path.clone() }
    }
}

#[async_trait(?Send)]
impl MealSource for HttpMealSource {
    async fn fetch_meals(&self, query: Option<&str>) -> MealsResult<Vec<MealTo>> {
        list_meals(&self.resource_path, query).await
    }
}
