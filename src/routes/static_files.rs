use crate::state::AppState;
use log::debug;
use rocket::fs::NamedFile;
use rocket::http::uri::{Segments, fmt};
use rocket::{Route, State, get, routes};
use std::path::Path;

async fn index_file(root: &Path) -> Option<NamedFile> {
    NamedFile::open(root.join("index.html")).await.ok()
}

/// Serve the dashboard's entry point
#[get("/")]
pub async fn index(state: &State<AppState>) -> Option<NamedFile> {
    index_file(Path::new(&state.config.static_dir)).await
}

/// Serve a built asset, or fall back to `index.html` so client-side routes
/// such as `/package/@scope/name` survive a reload. `/api/...` never falls
/// back.
#[get("/<file..>", rank = 10)]
pub async fn static_files(
    file: Segments<'_, fmt::Path>,
    state: &State<AppState>,
) -> Option<NamedFile> {
    if file.get(0) == Some("api") {
        return None;
    }

    let root = Path::new(&state.config.static_dir);
    // Unsafe or encoded-slash segments cannot name an asset
    if let Ok(relative) = file.to_path_buf(false) {
        let candidate = root.join(&relative);
        if candidate.is_file() {
            return NamedFile::open(candidate).await.ok();
        }
        debug!("No asset at {}, serving index.html", relative.display());
    }

    index_file(root).await
}

pub fn get_static_routes() -> Vec<Route> {
    routes![index, static_files]
}
