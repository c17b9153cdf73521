// src/core/net.rs
//
// Blocking HTTPS helpers. Only ever called from import worker threads.
use reqwest::blocking::Client;
use serde::{de::DeserializeOwned, Serialize};

use crate::config::{consts::USER_AGENT, options::ImportOptions};
use crate::error::ImportError;

pub fn client(opts: &ImportOptions) -> Result<Client, ImportError> {
    let client = Client::builder()
        .user_agent(USER_AGENT)
        .timeout(opts.timeout())
        .build()?;
    Ok(client)
}

pub fn http_get(client: &Client, url: &str) -> Result<String, ImportError> {
    logd!("Net: GET {url}");
    let resp = client.get(url).send()?.error_for_status()?;
    Ok(resp.text()?)
}

pub fn post_json<B, T>(client: &Client, url: &str, body: &B) -> Result<T, ImportError>
where
    B: Serialize + ?Sized,
    T: DeserializeOwned,
{
    logd!("Net: POST {url}");
    let resp = client.post(url).json(body).send()?.error_for_status()?;
    Ok(resp.json::<T>()?)
}
