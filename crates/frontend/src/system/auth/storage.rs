use web_sys::window;

// Keys written by the host shell when the user signs in there.
const SESSION_TOKEN_KEY: &str = "session_token";
const SESSION_USERNAME_KEY: &str = "session_username";

fn get_local_storage() -> Option<web_sys::Storage> {
    window()?.local_storage().ok()?
}

/// Get the API token deposited by the host shell
pub fn get_token() -> Option<String> {
    get_local_storage()?.get_item(SESSION_TOKEN_KEY).ok()?
}

/// Get the signed-in user's email, if the host shell recorded one
pub fn get_username() -> Option<String> {
    get_local_storage()?.get_item(SESSION_USERNAME_KEY).ok()?
}

/// Drop the stored session (used when the API rejects the token)
pub fn clear_session() {
    if let Some(storage) = get_local_storage() {
        let _ = storage.remove_item(SESSION_TOKEN_KEY);
        let _ = storage.remove_item(SESSION_USERNAME_KEY);
    }
}
