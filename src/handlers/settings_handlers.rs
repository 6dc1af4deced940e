use actix_session::Session;
use actix_web::{web, HttpResponse};
use serde::Deserialize;

use crate::auth::csrf;
use crate::auth::session::{load_catalog, set_flash, store_catalog};
use crate::errors::{AppError, render};
use crate::models::setting::{self, CatalogError, SettingsCatalog, SettingsSection};
use crate::templates_structs::{PageContext, SettingsTemplate, SectionLink};

#[derive(Deserialize)]
pub struct SettingsQuery {
    section: Option<String>,
    edit: Option<String>,
}

#[derive(Deserialize)]
pub struct CatalogForm {
    #[serde(default)]
    pub name: String,
    pub csrf_token: String,
}

/// GET /settings
pub async fn list(
    session: Session,
    query: web::Query<SettingsQuery>,
) -> Result<HttpResponse, AppError> {
    let section = SettingsSection::from_id(query.section.as_deref().unwrap_or(""));
    let catalog = load_catalog(&session)?;

    let ctx = PageContext::build(&session, "/settings");
    let tmpl = SettingsTemplate {
        ctx,
        sections: SectionLink::all(section),
        active_id: section.id().to_string(),
        active_label: section.label().to_string(),
        groups: setting::section_groups(section),
        departments: catalog.departments,
        statuses: catalog.statuses,
        editing_id: query.edit.clone().unwrap_or_default(),
    };
    render(tmpl)
}

fn redirect_to(section: SettingsSection) -> HttpResponse {
    HttpResponse::SeeOther()
        .insert_header(("Location", format!("/settings?section={}", section.id())))
        .finish()
}

/// Validate CSRF, apply one catalog edit, store the result in the session and
/// redirect back with a flash message.
fn apply_catalog_edit(
    session: &Session,
    csrf_token: &str,
    section: SettingsSection,
    edit: impl FnOnce(&mut SettingsCatalog) -> Result<String, CatalogError>,
) -> Result<HttpResponse, AppError> {
    csrf::validate_csrf(session, csrf_token)?;

    let mut catalog = load_catalog(session)?;
    match edit(&mut catalog) {
        Ok(message) => {
            store_catalog(session, &catalog)?;
            log::info!("settings: {message}");
            set_flash(session, &message);
        }
        Err(CatalogError::NotFound(id)) => {
            log::warn!("settings: no catalog entry '{id}'");
            return Err(AppError::NotFound);
        }
        Err(e) => set_flash(session, &e.to_string()),
    }
    Ok(redirect_to(section))
}

/// POST /settings/departments
pub async fn add_department(
    session: Session,
    form: web::Form<CatalogForm>,
) -> Result<HttpResponse, AppError> {
    apply_catalog_edit(&session, &form.csrf_token, SettingsSection::Departments, |c| {
        let dept = c.add_department(&form.name)?;
        Ok(format!("Department \"{}\" added", dept.name))
    })
}

/// POST /settings/departments/{id}
pub async fn rename_department(
    session: Session,
    path: web::Path<String>,
    form: web::Form<CatalogForm>,
) -> Result<HttpResponse, AppError> {
    let id = path.into_inner();
    apply_catalog_edit(&session, &form.csrf_token, SettingsSection::Departments, |c| {
        c.rename_department(&id, &form.name)?;
        Ok(format!("Department renamed to \"{}\"", form.name.trim()))
    })
}

/// POST /settings/departments/{id}/delete
pub async fn delete_department(
    session: Session,
    path: web::Path<String>,
    form: web::Form<CatalogForm>,
) -> Result<HttpResponse, AppError> {
    let id = path.into_inner();
    apply_catalog_edit(&session, &form.csrf_token, SettingsSection::Departments, |c| {
        let dept = c.delete_department(&id)?;
        Ok(format!("Department \"{}\" deleted", dept.name))
    })
}

/// POST /settings/statuses
pub async fn add_status(
    session: Session,
    form: web::Form<CatalogForm>,
) -> Result<HttpResponse, AppError> {
    apply_catalog_edit(&session, &form.csrf_token, SettingsSection::Statuses, |c| {
        let status = c.add_status(&form.name)?;
        Ok(format!("Status \"{}\" added", status.name))
    })
}

/// POST /settings/statuses/{id}
pub async fn rename_status(
    session: Session,
    path: web::Path<String>,
    form: web::Form<CatalogForm>,
) -> Result<HttpResponse, AppError> {
    let id = path.into_inner();
    apply_catalog_edit(&session, &form.csrf_token, SettingsSection::Statuses, |c| {
        c.rename_status(&id, &form.name)?;
        Ok(format!("Status renamed to \"{}\"", form.name.trim()))
    })
}

/// POST /settings/statuses/{id}/delete
pub async fn delete_status(
    session: Session,
    path: web::Path<String>,
    form: web::Form<CatalogForm>,
) -> Result<HttpResponse, AppError> {
    let id = path.into_inner();
    apply_catalog_edit(&session, &form.csrf_token, SettingsSection::Statuses, |c| {
        let status = c.delete_status(&id)?;
        Ok(format!("Status \"{}\" deleted", status.name))
    })
}
