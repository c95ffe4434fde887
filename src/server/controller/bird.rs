use axum::{
    extract::{multipart::MultipartError, Multipart, Path, State},
    response::{IntoResponse, Redirect, Response},
    Form,
};
use chrono::Utc;
use dioxus_logger::tracing;
use tower_sessions::Session;

use crate::{
    model::{
        bird::{CreateBirdDto, UpdateBirdDto},
        feeding::FeedingDto,
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::{
            bird::{CreateBirdParams, UpdateBirdParams},
            feeding::CreateFeedingParams,
        },
        service::{bird::BirdService, feeding::FeedingService, photo::PhotoService, toy::ToyService},
        state::AppState,
    },
    view,
};

/// Multipart field carrying the uploaded photo.
pub const PHOTO_FIELD: &str = "photo-file";

fn detail_path(bird_id: i32) -> String {
    format!("/birds/{}/", bird_id)
}

fn bird_not_found() -> AppError {
    AppError::NotFound("Bird not found".to_string())
}

/// Lists the current user's birds.
pub async fn index(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let birds = BirdService::new(&state.db).get_by_user(user.id).await?;

    Ok(view::bird::index(user, birds))
}

/// Shows a bird with its feedings, toys and photos.
///
/// # Access Control
/// - `BirdOwner` - Only the bird's owner may view it
pub async fn detail(
    State(state): State<AppState>,
    session: Session,
    Path(bird_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session)
        .require(&[Permission::BirdOwner(bird_id)])
        .await?;

    let today = Utc::now().date_naive();
    let detail = BirdService::new(&state.db)
        .get_detail(bird_id, today)
        .await?
        .ok_or_else(bird_not_found)?;

    Ok(view::bird::detail(user, detail, today))
}

pub async fn create_page(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    Ok(view::bird::create_form(user, CreateBirdDto::default(), Vec::new()))
}

/// Creates a bird owned by the current user.
///
/// Validation failures re-render the form with the submitted values.
pub async fn create(
    State(state): State<AppState>,
    session: Session,
    Form(payload): Form<CreateBirdDto>,
) -> Result<Response, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let params = match CreateBirdParams::from_dto(user.id, payload.clone()) {
        Ok(params) => params,
        Err(err) => {
            let errors = err.messages().to_vec();
            return Ok(view::bird::create_form(user, payload, errors).into_response());
        }
    };

    let bird = BirdService::new(&state.db).create(params).await?;
    tracing::info!("User {} added bird {}", user.id, bird.id);

    Ok(Redirect::to(&detail_path(bird.id)).into_response())
}

/// Shows the edit form prefilled with the bird's current values.
///
/// # Access Control
/// - `BirdOwner` - Only the bird's owner may edit it
pub async fn update_page(
    State(state): State<AppState>,
    session: Session,
    Path(bird_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session)
        .require(&[Permission::BirdOwner(bird_id)])
        .await?;

    let bird = BirdService::new(&state.db)
        .get_by_id(bird_id)
        .await?
        .ok_or_else(bird_not_found)?;
    let form = UpdateBirdDto {
        breed: bird.breed.clone(),
        description: bird.description.clone(),
        age: bird.age.to_string(),
    };

    Ok(view::bird::update_form(user, bird, form, Vec::new()))
}

/// Updates breed, description and age. A submitted name is ignored.
///
/// # Access Control
/// - `BirdOwner` - Only the bird's owner may edit it
pub async fn update(
    State(state): State<AppState>,
    session: Session,
    Path(bird_id): Path<i32>,
    Form(payload): Form<UpdateBirdDto>,
) -> Result<Response, AppError> {
    let user = AuthGuard::new(&state.db, &session)
        .require(&[Permission::BirdOwner(bird_id)])
        .await?;

    let service = BirdService::new(&state.db);

    let params = match UpdateBirdParams::from_dto(payload.clone()) {
        Ok(params) => params,
        Err(err) => {
            let bird = service.get_by_id(bird_id).await?.ok_or_else(bird_not_found)?;
            let errors = err.messages().to_vec();
            return Ok(view::bird::update_form(user, bird, payload, errors).into_response());
        }
    };

    service.update(bird_id, params).await?;

    Ok(Redirect::to(&detail_path(bird_id)).into_response())
}

/// # Access Control
/// - `BirdOwner` - Only the bird's owner may delete it
pub async fn delete_page(
    State(state): State<AppState>,
    session: Session,
    Path(bird_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session)
        .require(&[Permission::BirdOwner(bird_id)])
        .await?;

    let bird = BirdService::new(&state.db)
        .get_by_id(bird_id)
        .await?
        .ok_or_else(bird_not_found)?;

    Ok(view::bird::confirm_delete(user, bird))
}

/// Deletes a bird with its feedings, photos and toy associations.
///
/// # Access Control
/// - `BirdOwner` - Only the bird's owner may delete it
pub async fn delete(
    State(state): State<AppState>,
    session: Session,
    Path(bird_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session)
        .require(&[Permission::BirdOwner(bird_id)])
        .await?;

    BirdService::new(&state.db).delete(bird_id).await?;
    tracing::info!("User {} deleted bird {}", user.id, bird_id);

    Ok(Redirect::to("/birds/"))
}

/// Records a feeding.
///
/// An invalid submission is logged and dropped; either way the user goes back to the
/// detail page.
///
/// # Access Control
/// - `BirdOwner` - Only the bird's owner may feed it
pub async fn add_feeding(
    State(state): State<AppState>,
    session: Session,
    Path(bird_id): Path<i32>,
    Form(payload): Form<FeedingDto>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &session)
        .require(&[Permission::BirdOwner(bird_id)])
        .await?;

    match CreateFeedingParams::from_dto(bird_id, payload) {
        Ok(params) => {
            FeedingService::new(&state.db).create(params).await?;
        }
        Err(err) => {
            tracing::warn!("Invalid feeding for bird {}: {}", bird_id, err);
        }
    }

    Ok(Redirect::to(&detail_path(bird_id)))
}

/// # Access Control
/// - `BirdOwner` - Only the bird's owner may give it toys
pub async fn associate_toy(
    State(state): State<AppState>,
    session: Session,
    Path((bird_id, toy_id)): Path<(i32, i32)>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &session)
        .require(&[Permission::BirdOwner(bird_id)])
        .await?;

    ToyService::new(&state.db).associate(bird_id, toy_id).await?;

    Ok(Redirect::to(&detail_path(bird_id)))
}

/// # Access Control
/// - `BirdOwner` - Only the bird's owner may take its toys away
pub async fn remove_toy(
    State(state): State<AppState>,
    session: Session,
    Path((bird_id, toy_id)): Path<(i32, i32)>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &session)
        .require(&[Permission::BirdOwner(bird_id)])
        .await?;

    ToyService::new(&state.db).remove(bird_id, toy_id).await?;

    Ok(Redirect::to(&detail_path(bird_id)))
}

/// Uploads a photo from the `photo-file` multipart field.
///
/// Without a file nothing is uploaded. A storage failure is logged by the service and no
/// photo is recorded. All outcomes redirect to the detail page.
///
/// # Access Control
/// - `BirdOwner` - Only the bird's owner may add photos
pub async fn add_photo(
    State(state): State<AppState>,
    session: Session,
    Path(bird_id): Path<i32>,
    mut multipart: Multipart,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &session)
        .require(&[Permission::BirdOwner(bird_id)])
        .await?;

    let upload = match read_photo_field(&mut multipart).await {
        Ok(upload) => upload,
        Err(err) => {
            tracing::warn!("Unreadable photo upload for bird {}: {}", bird_id, err);
            None
        }
    };

    if let Some((file_name, bytes)) = upload {
        PhotoService::new(&state.db, &state.storage)
            .add(bird_id, &file_name, bytes)
            .await?;
    }

    Ok(Redirect::to(&detail_path(bird_id)))
}

/// Pulls the filename and contents of the photo field out of a multipart body.
///
/// Returns `None` when the field is missing or was submitted without a file. A body over
/// the route's limit fails with a `MultipartError` while the field is read.
async fn read_photo_field(
    multipart: &mut Multipart,
) -> Result<Option<(String, Vec<u8>)>, MultipartError> {
    while let Some(field) = multipart.next_field().await? {
        if field.name() != Some(PHOTO_FIELD) {
            continue;
        }

        let file_name = field.file_name().unwrap_or_default().to_string();
        if file_name.is_empty() {
            return Ok(None);
        }

        let bytes = field.bytes().await?;
        return Ok(Some((file_name, bytes.to_vec())));
    }

    Ok(None)
}
