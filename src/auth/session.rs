use actix_session::Session;

use crate::errors::AppError;
use crate::models::setting::SettingsCatalog;

const FLASH_KEY: &str = "flash";
const CATALOG_KEY: &str = "settings_catalog";

pub fn set_flash(session: &Session, message: &str) {
    if let Err(e) = session.insert(FLASH_KEY, message) {
        log::warn!("Could not store flash message: {e}");
    }
}

pub fn take_flash(session: &Session) -> Option<String> {
    let flash = session.get::<String>(FLASH_KEY).unwrap_or(None);
    if flash.is_some() {
        session.remove(FLASH_KEY);
    }
    flash
}

/// The caller's settings catalog, or the default lists on first visit.
pub fn load_catalog(session: &Session) -> Result<SettingsCatalog, AppError> {
    Ok(session.get::<SettingsCatalog>(CATALOG_KEY)?.unwrap_or_default())
}

pub fn store_catalog(session: &Session, catalog: &SettingsCatalog) -> Result<(), AppError> {
    session.insert(CATALOG_KEY, catalog)?;
    Ok(())
}
