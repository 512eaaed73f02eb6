use crate::Catalog;
use chainstream_core::{error::Result, types::*, ChainError};
use chrono::{DateTime, Utc};

pub fn get_by_id(catalog: &Catalog, id: UserId) -> Result<Option<User>> {
    Ok(catalog.users.get(&id).cloned())
}

pub fn get_by_username(catalog: &Catalog, username: &str) -> Result<Option<User>> {
    Ok(catalog
        .users
        .values()
        .find(|user| user.username == username)
        .cloned())
}

pub fn create(catalog: &mut Catalog, user: CreateUser, now: DateTime<Utc>) -> Result<User> {
    user.validate()?;

    if catalog.users.values().any(|u| u.username == user.username) {
        return Err(ChainError::invalid_input(format!(
            "username '{}' is taken",
            user.username
        )));
    }
    if catalog.users.values().any(|u| u.email == user.email) {
        return Err(ChainError::invalid_input(format!(
            "email '{}' is already registered",
            user.email
        )));
    }

    let id = catalog.allocate_user_id();
    let user = user.into_user(id, now);
    catalog.users.insert(id, user.clone());

    Ok(user)
}
