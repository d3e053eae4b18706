use crate::constants::{CORS_PROXY, DIRECTORY_URL};
use globe_core::{demo_stations, parse_directory, Station};
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys as web;

async fn fetch_text(url: &str) -> anyhow::Result<String> {
    let opts = web::RequestInit::new();
    opts.set_method("GET");
    opts.set_mode(web::RequestMode::Cors);
    let request = web::Request::new_with_str_and_init(url, &opts)
        .map_err(|e| anyhow::anyhow!("request build failed: {:?}", e))?;

    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let resp_value = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(|e| anyhow::anyhow!("fetch failed: {:?}", e))?;
    let resp: web::Response = resp_value
        .dyn_into()
        .map_err(|_| anyhow::anyhow!("fetch did not return a Response"))?;
    if !resp.ok() {
        anyhow::bail!("HTTP {}", resp.status());
    }
    let text = JsFuture::from(
        resp.text()
            .map_err(|e| anyhow::anyhow!("body read failed: {:?}", e))?,
    )
    .await
    .map_err(|e| anyhow::anyhow!("body read failed: {:?}", e))?;
    text.as_string()
        .ok_or_else(|| anyhow::anyhow!("body is not text"))
}

/// Fetch the station directory, falling back to the bundled demo catalog on
/// any failure so the globe always has something to show.
pub async fn load_stations() -> Vec<Station> {
    let encoded: String = js_sys::encode_uri_component(DIRECTORY_URL).into();
    let url = format!("{}{}", CORS_PROXY, encoded);
    let stations = match fetch_text(&url).await {
        Ok(body) => parse_directory(&body).map_err(anyhow::Error::from),
        Err(e) => Err(e),
    };
    match stations {
        Ok(stations) if !stations.is_empty() => {
            log::info!("[catalog] loaded {} stations", stations.len());
            stations
        }
        Ok(_) => {
            log::warn!("[catalog] directory returned no usable stations; using demo catalog");
            demo_stations()
        }
        Err(e) => {
            log::warn!("[catalog] {}; using demo catalog", e);
            demo_stations()
        }
    }
}
