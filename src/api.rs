use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestInit, RequestMode, Response};

use crate::types::{PostRecord, UserRecord};

const API_URL: &str = "https://jsonplaceholder.typicode.com";

fn create_request_init() -> RequestInit {
    let opts = RequestInit::new();
    opts.set_method("GET");
    opts.set_mode(RequestMode::Cors);
    opts
}

async fn fetch_json(url: &str) -> Result<JsValue, JsValue> {
    let window = web_sys::window().ok_or("no window")?;

    let opts = create_request_init();
    let request = Request::new_with_str_and_init(url, &opts)?;

    let resp_value = JsFuture::from(window.fetch_with_request(&request)).await?;
    let resp: Response = resp_value.dyn_into()?;

    if !resp.ok() {
        return Err(format!("HTTP error: {}", resp.status()).into());
    }

    JsFuture::from(resp.json()?).await
}

/// Fetch the full user list. Trips are derived from the first five entries.
pub async fn fetch_users() -> Result<Vec<UserRecord>, JsValue> {
    let url = format!("{}/users", API_URL);
    let json = fetch_json(&url).await?;
    let users: Vec<UserRecord> = serde_wasm_bindgen::from_value(json)?;
    Ok(users)
}

/// Fetch at most `limit` posts, enforced server-side via `_limit`.
pub async fn fetch_posts(limit: u32) -> Result<Vec<PostRecord>, JsValue> {
    let url = format!("{}/posts?_limit={}", API_URL, limit);
    let json = fetch_json(&url).await?;
    let posts: Vec<PostRecord> = serde_wasm_bindgen::from_value(json)?;
    Ok(posts)
}
