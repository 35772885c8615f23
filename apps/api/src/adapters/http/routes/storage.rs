use axum::{
    Json, Router,
    extract::{DefaultBodyLimit, Multipart, Path, Query, State, multipart::MultipartError},
    routing::{delete, get, post},
};
use serde::{Deserialize, Serialize};

use crate::{
    adapters::http::app_state::AppState,
    app_error::{AppError, AppResult},
    application::use_cases::storage::{UploadReceipt, UploadedFile},
};

pub fn router(max_upload_bytes: usize) -> Router<AppState> {
    Router::new()
        .route(
            "/upload",
            post(upload_file).layer(DefaultBodyLimit::max(max_upload_bytes)),
        )
        .route("/files/{bucket}", get(list_files))
        .route("/files/{bucket}/{*path}", delete(delete_file))
}

#[derive(Debug, Deserialize)]
struct ListQuery {
    folder: Option<String>,
}

#[derive(Debug, Serialize)]
struct DeleteResponse {
    success: bool,
    message: &'static str,
}

async fn upload_file(
    State(app_state): State<AppState>,
    mut multipart: Multipart,
) -> AppResult<Json<UploadReceipt>> {
    let mut file = None;
    let mut bucket = None;
    let mut folder = None;

    while let Some(field) = multipart.next_field().await.map_err(multipart_error)? {
        let name = field.name().unwrap_or_default().to_string();
        match name.as_str() {
            "file" => {
                let file_name = field.file_name().unwrap_or("upload").to_string();
                let content_type = field
                    .content_type()
                    .unwrap_or("application/octet-stream")
                    .to_string();
                let bytes = field.bytes().await.map_err(multipart_error)?;
                file = Some(UploadedFile {
                    file_name,
                    content_type,
                    bytes: bytes.to_vec(),
                });
            }
            "bucket" => bucket = Some(field.text().await.map_err(multipart_error)?),
            "folder" => folder = Some(field.text().await.map_err(multipart_error)?),
            _ => {}
        }
    }

    let file = file.ok_or_else(|| AppError::InvalidInput("No file provided".into()))?;
    let bucket = bucket.filter(|b| !b.trim().is_empty());
    let receipt = app_state
        .storage_use_cases
        .upload(bucket.as_deref(), folder.as_deref(), file)
        .await?;
    Ok(Json(receipt))
}

async fn list_files(
    State(app_state): State<AppState>,
    Path(bucket): Path<String>,
    Query(query): Query<ListQuery>,
) -> AppResult<Json<Vec<serde_json::Value>>> {
    let files = app_state
        .storage_use_cases
        .list_files(&bucket, query.folder.as_deref())
        .await?;
    Ok(Json(files))
}

async fn delete_file(
    State(app_state): State<AppState>,
    Path((bucket, path)): Path<(String, String)>,
) -> AppResult<Json<DeleteResponse>> {
    app_state
        .storage_use_cases
        .delete_file(&bucket, &path)
        .await?;
    Ok(Json(DeleteResponse {
        success: true,
        message: "File deleted",
    }))
}

fn multipart_error(err: MultipartError) -> AppError {
    AppError::InvalidInput(err.body_text())
}
