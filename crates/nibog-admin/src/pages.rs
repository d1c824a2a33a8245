//! Server-rendered admin pages.
//!
//! | Method | Path | Page |
//! |--------|------|------|
//! | `GET` | `/admin/cities` | City list with search |
//! | `GET` | `/admin/cities/new` | Create form |
//! | `POST` | `/admin/cities` | Create, then back to the list |
//! | `GET` | `/admin/cities/{id}` | City detail with venue and event tables |
//! | `GET` | `/admin/cities/{id}/edit` | Edit form |
//! | `POST` | `/admin/cities/{id}/edit` | Save, then back to the edit form |
//! | `GET` | `/admin/cities/{id}/delete` | Delete confirmation |
//! | `POST` | `/admin/cities/{id}/delete` | Delete, then back to the list |
//!
//! An unknown city renders the "City not found" page with a 404 status.
//! Form posts answer with `303 See Other` so a reload never resubmits.

use std::sync::Arc;

use axum::Form;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Redirect, Response};
use minijinja::context;
use nibog_core::{CatalogError, FormPhase};
use nibog_types::{City, CityDraft};

use crate::error::AdminError;
use crate::handlers::SearchQuery;
use crate::state::AppState;

/// Path of the city list page.
pub const CITIES_PATH: &str = "/admin/cities";

/// Fields posted by the create and edit forms.
///
/// An unchecked checkbox is simply absent from the form body.
#[derive(Debug, Default, serde::Deserialize)]
pub struct CityForm {
    /// City name.
    #[serde(default)]
    pub name: String,
    /// State or province.
    #[serde(default)]
    pub state: String,
    /// Present when the "Active Status" box is checked.
    pub is_active: Option<String>,
}

impl From<CityForm> for CityDraft {
    fn from(form: CityForm) -> Self {
        Self {
            name: form.name,
            state: form.state,
            is_active: form.is_active.is_some(),
        }
    }
}

/// Settings that differ between the create and edit variants of the form.
struct FormPage<'a> {
    heading: &'a str,
    subheading: &'a str,
    description: &'a str,
    submit_label: &'a str,
    busy_label: &'a str,
    action: String,
    city: Option<&'a City>,
}

impl<'a> FormPage<'a> {
    const fn create() -> Self {
        Self {
            heading: "Add New City",
            subheading: "Add a new city for NIBOG events",
            description: "Enter the details for the new city",
            submit_label: "Create City",
            busy_label: "Creating...",
            action: String::new(),
            city: None,
        }
    }

    fn edit(city: &'a City) -> Self {
        Self {
            heading: "Edit City",
            subheading: "Update city information for NIBOG events",
            description: "Update the city details below",
            submit_label: "Save Changes",
            busy_label: "Saving...",
            action: format!("{CITIES_PATH}/{}/edit", city.id),
            city: Some(city),
        }
    }

    fn render(
        &self,
        state: &AppState,
        draft: &CityDraft,
        phase: FormPhase,
        missing: &[String],
    ) -> Result<String, AdminError> {
        let action = if self.action.is_empty() {
            CITIES_PATH
        } else {
            self.action.as_str()
        };
        state.pages.render(
            "city_form.html",
            context! {
                heading => self.heading,
                subheading => self.subheading,
                description => self.description,
                submit_label => self.submit_label,
                busy_label => self.busy_label,
                action => action,
                city => self.city,
                draft => draft,
                phase => phase,
                missing => missing,
            },
        )
    }
}

/// Render the "City not found" page.
fn not_found_page(state: &AppState) -> Result<Response, AdminError> {
    let html = state.pages.render("not_found.html", context! {})?;
    Ok((StatusCode::NOT_FOUND, Html(html)).into_response())
}

/// Turn a catalog lookup failure into the not-found page, passing other
/// errors through.
fn or_not_found(state: &AppState, err: CatalogError) -> Result<Response, AdminError> {
    match err {
        CatalogError::CityNotFound(_) => not_found_page(state),
        other => Err(other.into()),
    }
}

// ---------------------------------------------------------------------------
// GET / and GET /admin/cities
// ---------------------------------------------------------------------------

/// Send the bare root to the city list.
pub async fn index() -> Redirect {
    Redirect::to(CITIES_PATH)
}

/// City list filtered by `?q=`.
pub async fn list_page(
    State(state): State<Arc<AppState>>,
    Query(params): Query<SearchQuery>,
) -> Result<Html<String>, AdminError> {
    let store = state.store.read().await;
    let cities = store.search(&params.q);
    let html = state.pages.render(
        "cities.html",
        context! {
            query => params.q,
            cities => cities,
        },
    )?;
    Ok(Html(html))
}

// ---------------------------------------------------------------------------
// GET /admin/cities/{id}
// ---------------------------------------------------------------------------

/// City detail with its venue and event tables.
pub async fn detail_page(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Response, AdminError> {
    let detail = match state.store.read().await.detail(&id) {
        Ok(detail) => detail,
        Err(err) => return or_not_found(&state, err),
    };
    let html = state.pages.render(
        "city.html",
        context! {
            city => detail.city,
            venues => detail.venues,
            events => detail.events,
        },
    )?;
    Ok(Html(html).into_response())
}

// ---------------------------------------------------------------------------
// GET /admin/cities/new, POST /admin/cities
// ---------------------------------------------------------------------------

/// Empty create form. New cities start out active.
pub async fn new_page(State(state): State<Arc<AppState>>) -> Result<Html<String>, AdminError> {
    let html = FormPage::create().render(&state, &CityDraft::default(), FormPhase::Idle, &[])?;
    Ok(Html(html))
}

/// Create the city, then go back to the list.
pub async fn create_submit(
    State(state): State<Arc<AppState>>,
    Form(form): Form<CityForm>,
) -> Result<Response, AdminError> {
    let draft = CityDraft::from(form);
    match state.create_city(&draft).await {
        Ok(_) => Ok(Redirect::to(CITIES_PATH).into_response()),
        Err(CatalogError::MissingField(missing)) => {
            let html = FormPage::create().render(&state, &draft, FormPhase::Idle, &missing)?;
            Ok((StatusCode::UNPROCESSABLE_ENTITY, Html(html)).into_response())
        }
        Err(err) => Err(err.into()),
    }
}

// ---------------------------------------------------------------------------
// GET /admin/cities/{id}/edit, POST /admin/cities/{id}/edit
// ---------------------------------------------------------------------------

/// Edit form prefilled from the city, showing "Saved" while the indicator lasts.
pub async fn edit_page(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Response, AdminError> {
    let city = match state.store.read().await.lookup(&id) {
        Ok(city) => city.clone(),
        Err(err) => return or_not_found(&state, err),
    };
    let phase = state.edit_phase(city.id).await;
    let html = FormPage::edit(&city).render(&state, &CityDraft::from_city(&city), phase, &[])?;
    Ok(Html(html).into_response())
}

/// Save the edit form, then return to it.
pub async fn edit_submit(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    Form(form): Form<CityForm>,
) -> Result<Response, AdminError> {
    let draft = CityDraft::from(form);
    match state.save_city(&id, &draft).await {
        Ok(city) => Ok(Redirect::to(&format!("{CITIES_PATH}/{}/edit", city.id)).into_response()),
        Err(CatalogError::MissingField(missing)) => {
            let city = match state.store.read().await.lookup(&id) {
                Ok(city) => city.clone(),
                Err(err) => return or_not_found(&state, err),
            };
            let html = FormPage::edit(&city).render(&state, &draft, FormPhase::Idle, &missing)?;
            Ok((StatusCode::UNPROCESSABLE_ENTITY, Html(html)).into_response())
        }
        Err(err) => or_not_found(&state, err),
    }
}

// ---------------------------------------------------------------------------
// GET /admin/cities/{id}/delete, POST /admin/cities/{id}/delete
// ---------------------------------------------------------------------------

/// Delete confirmation showing what the city still carries.
pub async fn delete_page(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Response, AdminError> {
    let detail = match state.store.read().await.detail(&id) {
        Ok(detail) => detail,
        Err(err) => return or_not_found(&state, err),
    };
    let deleting = state.is_deleting(detail.city.id).await;
    let html = state.pages.render(
        "delete.html",
        context! {
            city => detail.city,
            impact => detail.delete_impact,
            deleting => deleting,
        },
    )?;
    Ok(Html(html).into_response())
}

/// Delete the city, then go back to the list.
pub async fn delete_submit(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Response, AdminError> {
    match state.delete_city(&id).await {
        Ok(_) => Ok(Redirect::to(CITIES_PATH).into_response()),
        Err(CatalogError::DeleteInFlight(_)) => {
            let detail = match state.store.read().await.detail(&id) {
                Ok(detail) => detail,
                Err(err) => return or_not_found(&state, err),
            };
            let html = state.pages.render(
                "delete.html",
                context! {
                    city => detail.city,
                    impact => detail.delete_impact,
                    deleting => true,
                },
            )?;
            Ok((StatusCode::CONFLICT, Html(html)).into_response())
        }
        Err(err) => or_not_found(&state, err),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unchecked_box_means_inactive() {
        let draft = CityDraft::from(CityForm {
            name: String::from("Goa"),
            state: String::from("Goa"),
            is_active: None,
        });
        assert!(!draft.is_active);

        let draft = CityDraft::from(CityForm {
            is_active: Some(String::from("on")),
            ..CityForm::default()
        });
        assert!(draft.is_active);
    }
}
