use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use tokio::sync::Notify;
use tracing::warn;

use crate::modules::gallery::application::form::reducer::{
    apply, FormEvent, FormMode, FormState, GalleryForm,
};
use crate::modules::gallery::application::gallery_use_cases::GalleryUseCases;
use crate::modules::gallery::application::ports::outgoing::{
    CreateGalleryData, GalleryRecord, UpdateGalleryData,
};
use crate::modules::upload::application::orchestrator::{
    FilePreview, SelectionError, UploadOrchestrator,
};
use crate::shared::alert::{AlertKind, AlertPresenter};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    Success,
    ValidationRejected,
    Busy,
    UploadFailed,
    MutationFailed,
    Cancelled,
}

/// Async driver around the pure form reducer.
///
/// Owns one form at a time, routes a submit through upload then the
/// create/update use case picked by the explicit [`FormMode`], and keeps the
/// cached gallery list fresh. At most one submission runs at once; closing
/// the dialog cancels an in-flight one, after which no state is touched.
pub struct GalleryFormSession {
    form: Mutex<GalleryForm>,
    use_cases: GalleryUseCases,
    orchestrator: Arc<UploadOrchestrator>,
    alerts: AlertPresenter,
    cancel: Mutex<Option<Arc<Notify>>>,
    galleries: Mutex<Vec<GalleryRecord>>,
}

impl GalleryFormSession {
    pub fn new(
        use_cases: GalleryUseCases,
        orchestrator: Arc<UploadOrchestrator>,
        alerts: AlertPresenter,
    ) -> Self {
        Self {
            form: Mutex::new(GalleryForm::default()),
            use_cases,
            orchestrator,
            alerts,
            cancel: Mutex::new(None),
            galleries: Mutex::new(Vec::new()),
        }
    }

    pub fn form(&self) -> GalleryForm {
        self.form.lock().unwrap().clone()
    }

    pub fn alerts(&self) -> &AlertPresenter {
        &self.alerts
    }

    pub fn galleries(&self) -> Vec<GalleryRecord> {
        self.galleries.lock().unwrap().clone()
    }

    pub fn open_dialog(&self) {
        self.dispatch(FormEvent::DialogOpened);
    }

    pub fn edit(&self, record: &GalleryRecord) {
        self.dispatch(FormEvent::EditRequested {
            id: record.id,
            name: record.name.clone(),
            description: record.description.clone(),
            image_path: record.image.path.clone(),
        });
    }

    pub fn set_fields(&self, name: impl Into<String>, description: impl Into<String>) {
        self.dispatch(FormEvent::FieldsChanged {
            name: name.into(),
            description: description.into(),
        });
    }

    /// Validate and preview a selection. Ignored while a submission is in
    /// flight; a successful selection replaces the previous one wholesale.
    pub async fn select_files(&self, paths: &[PathBuf]) -> Result<(), SelectionError> {
        if self.form.lock().unwrap().state == FormState::Submitting {
            return Ok(());
        }
        let previews = self.orchestrator.select_files(paths).await?;
        self.dispatch(FormEvent::FilesSelected(previews));
        Ok(())
    }

    /// Run the current form through upload and mutation.
    pub async fn submit(&self) -> SubmitOutcome {
        let (mode, name, description, previews) = {
            let mut form = self.form.lock().unwrap();
            if form.state == FormState::Submitting {
                return SubmitOutcome::Busy;
            }
            let next = apply(form.clone(), FormEvent::SubmitRequested);
            let accepted = next.state == FormState::Submitting;
            *form = next.clone();
            if !accepted {
                return SubmitOutcome::ValidationRejected;
            }
            (next.mode, next.name, next.description, next.previews)
        };

        let cancel = Arc::new(Notify::new());
        *self.cancel.lock().unwrap() = Some(Arc::clone(&cancel));

        let outcome = tokio::select! {
            _ = cancel.notified() => SubmitOutcome::Cancelled,
            outcome = self.run_submission(mode, name, description, previews) => outcome,
        };

        self.cancel.lock().unwrap().take();
        outcome
    }

    /// Close the dialog, cancelling any in-flight submission first.
    pub fn close_dialog(&self) {
        if let Some(cancel) = self.cancel.lock().unwrap().take() {
            cancel.notify_one();
        }
        self.dispatch(FormEvent::DialogClosed);
        self.alerts.clear();
    }

    pub async fn delete(&self, id: i32) -> bool {
        match self.use_cases.delete.execute(id).await {
            Ok(()) => {
                self.alerts.show(AlertKind::Default, "Gallery Deleted!");
                self.refresh().await;
                true
            }
            Err(err) => {
                warn!(error = %err, gallery_id = id, "gallery delete failed");
                self.alerts
                    .show(AlertKind::Destructive, "Failed to delete Gallery!");
                false
            }
        }
    }

    pub async fn refresh(&self) {
        match self.use_cases.get_list.execute().await {
            Ok(records) => *self.galleries.lock().unwrap() = records,
            Err(err) => warn!(error = %err, "gallery list refresh failed"),
        }
    }

    async fn run_submission(
        &self,
        mode: FormMode,
        name: String,
        description: String,
        previews: Vec<FilePreview>,
    ) -> SubmitOutcome {
        let paths = match self.orchestrator.materialize(&previews).await {
            Ok(paths) => paths,
            Err(err) => {
                warn!(error = %err, "image upload failed");
                if !self.complete(FormEvent::UploadFailed) {
                    return SubmitOutcome::Cancelled;
                }
                self.alerts
                    .show(AlertKind::Destructive, "Failed to upload image!");
                return SubmitOutcome::UploadFailed;
            }
        };

        let image_path = paths.into_iter().next().unwrap_or_default();
        let description = if description.trim().is_empty() {
            None
        } else {
            Some(description)
        };

        let result = match mode {
            FormMode::Create => self
                .use_cases
                .create
                .execute(CreateGalleryData {
                    name,
                    description,
                    image_path,
                })
                .await
                .map(|_| "Gallery Created!")
                .map_err(|e| ("Failed to create Gallery!", e.to_string())),
            FormMode::Edit { id } => self
                .use_cases
                .update
                .execute(UpdateGalleryData {
                    id,
                    name,
                    description,
                    image_path,
                })
                .await
                .map(|_| "Gallery Updated!")
                .map_err(|e| ("Failed to update Gallery!", e.to_string())),
        };

        match result {
            Ok(message) => {
                if !self.complete(FormEvent::MutationSucceeded) {
                    return SubmitOutcome::Cancelled;
                }
                self.alerts.show(AlertKind::Default, message);
                self.refresh().await;
                SubmitOutcome::Success
            }
            Err((message, detail)) => {
                warn!(error = %detail, "gallery mutation failed");
                if !self.complete(FormEvent::MutationFailed) {
                    return SubmitOutcome::Cancelled;
                }
                self.alerts.show(AlertKind::Destructive, message);
                SubmitOutcome::MutationFailed
            }
        }
    }

    fn dispatch(&self, event: FormEvent) {
        let mut form = self.form.lock().unwrap();
        *form = apply(form.clone(), event);
    }

    // Completion events only land on a still-submitting form; a form reset
    // by a concurrent dialog close stays untouched.
    fn complete(&self, event: FormEvent) -> bool {
        let mut form = self.form.lock().unwrap();
        if form.state != FormState::Submitting {
            return false;
        }
        *form = apply(form.clone(), event);
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::gallery::application::ports::incoming::use_cases::{
        CreateGalleryError, CreateGalleryUseCase, DeleteGalleryError, DeleteGalleryUseCase,
        GetGalleriesError, GetGalleriesUseCase, UpdateGalleryError, UpdateGalleryUseCase,
    };
    use crate::modules::gallery::application::ports::outgoing::ImageRecord;
    use crate::modules::upload::application::ports::outgoing::{ImageStore, ImageStoreError};
    use crate::modules::upload::application::upload_policy::UploadPolicy;
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicI32, AtomicUsize, Ordering};

    struct FakeBackend {
        records: Mutex<Vec<GalleryRecord>>,
        next_id: AtomicI32,
        create_calls: AtomicUsize,
        last_update: Mutex<Option<UpdateGalleryData>>,
    }

    impl FakeBackend {
        fn new() -> Arc<Self> {
            Arc::new(Self {
                records: Mutex::new(Vec::new()),
                next_id: AtomicI32::new(1),
                create_calls: AtomicUsize::new(0),
                last_update: Mutex::new(None),
            })
        }

        fn seeded_with(record: GalleryRecord) -> Arc<Self> {
            let backend = Self::new();
            backend.records.lock().unwrap().push(record);
            backend
        }
    }

    struct FakeGetList(Arc<FakeBackend>);

    #[async_trait]
    impl GetGalleriesUseCase for FakeGetList {
        async fn execute(&self) -> Result<Vec<GalleryRecord>, GetGalleriesError> {
            Ok(self.0.records.lock().unwrap().clone())
        }
    }

    struct FakeCreate(Arc<FakeBackend>);

    #[async_trait]
    impl CreateGalleryUseCase for FakeCreate {
        async fn execute(
            &self,
            data: CreateGalleryData,
        ) -> Result<GalleryRecord, CreateGalleryError> {
            self.0.create_calls.fetch_add(1, Ordering::SeqCst);
            let id = self.0.next_id.fetch_add(1, Ordering::SeqCst);
            let record = GalleryRecord {
                id,
                name: data.name,
                description: data.description,
                image: ImageRecord {
                    id,
                    path: data.image_path,
                },
            };
            self.0.records.lock().unwrap().push(record.clone());
            Ok(record)
        }
    }

    struct FakeUpdate(Arc<FakeBackend>);

    #[async_trait]
    impl UpdateGalleryUseCase for FakeUpdate {
        async fn execute(
            &self,
            data: UpdateGalleryData,
        ) -> Result<GalleryRecord, UpdateGalleryError> {
            *self.0.last_update.lock().unwrap() = Some(data.clone());
            let mut records = self.0.records.lock().unwrap();
            let record = records
                .iter_mut()
                .find(|r| r.id == data.id)
                .ok_or(UpdateGalleryError::NotFound)?;
            record.name = data.name;
            record.description = data.description;
            record.image.path = data.image_path;
            Ok(record.clone())
        }
    }

    struct FakeDelete(Arc<FakeBackend>);

    #[async_trait]
    impl DeleteGalleryUseCase for FakeDelete {
        async fn execute(&self, id: i32) -> Result<(), DeleteGalleryError> {
            let mut records = self.0.records.lock().unwrap();
            let before = records.len();
            records.retain(|r| r.id != id);
            if records.len() == before {
                return Err(DeleteGalleryError::NotFound);
            }
            Ok(())
        }
    }

    /// Create use case that never completes until the test says so.
    struct BlockingCreate {
        started: Arc<AtomicUsize>,
    }

    #[async_trait]
    impl CreateGalleryUseCase for BlockingCreate {
        async fn execute(
            &self,
            _data: CreateGalleryData,
        ) -> Result<GalleryRecord, CreateGalleryError> {
            self.started.fetch_add(1, Ordering::SeqCst);
            futures::future::pending::<()>().await;
            Err(CreateGalleryError::RepositoryError("unreachable".into()))
        }
    }

    struct CountingStore {
        puts: AtomicUsize,
    }

    #[async_trait]
    impl ImageStore for CountingStore {
        async fn put(&self, _bytes: Vec<u8>, content_type: &str) -> Result<String, ImageStoreError> {
            self.puts.fetch_add(1, Ordering::SeqCst);
            Ok(format!("data:{};base64,c3RvcmVk", content_type))
        }
    }

    fn use_cases_for(backend: &Arc<FakeBackend>) -> GalleryUseCases {
        GalleryUseCases {
            get_list: Arc::new(FakeGetList(Arc::clone(backend))),
            create: Arc::new(FakeCreate(Arc::clone(backend))),
            update: Arc::new(FakeUpdate(Arc::clone(backend))),
            delete: Arc::new(FakeDelete(Arc::clone(backend))),
        }
    }

    fn session_with(use_cases: GalleryUseCases, store: Arc<CountingStore>) -> GalleryFormSession {
        let orchestrator = Arc::new(UploadOrchestrator::new(store, UploadPolicy::single_image()));
        GalleryFormSession::new(use_cases, orchestrator, AlertPresenter::new())
    }

    fn counting_store() -> Arc<CountingStore> {
        Arc::new(CountingStore {
            puts: AtomicUsize::new(0),
        })
    }

    async fn temp_image(name_hint: &str) -> PathBuf {
        let path = std::env::temp_dir().join(format!(
            "utopia-form-{}-{}",
            uuid::Uuid::new_v4(),
            name_hint
        ));
        tokio::fs::write(&path, b"fake-image-bytes").await.unwrap();
        path
    }

    fn stored_record() -> GalleryRecord {
        GalleryRecord {
            id: 7,
            name: "Summer Party".to_string(),
            description: Some("Beach bash".to_string()),
            image: ImageRecord {
                id: 3,
                path: "https://cdn.utopia.club/keep.webp".to_string(),
            },
        }
    }

    #[tokio::test]
    async fn test_empty_name_submit_never_reaches_the_api() {
        let backend = FakeBackend::new();
        let session = session_with(use_cases_for(&backend), counting_store());
        let file = temp_image("party.png").await;

        session.open_dialog();
        session.set_fields("   ", "Beach bash");
        session.select_files(std::slice::from_ref(&file)).await.unwrap();

        let outcome = session.submit().await;

        assert_eq!(outcome, SubmitOutcome::ValidationRejected);
        assert_eq!(backend.create_calls.load(Ordering::SeqCst), 0);
        assert!(session.form().validation_error.is_some());

        tokio::fs::remove_file(file).await.unwrap();
    }

    #[tokio::test]
    async fn test_create_flow_persists_alerts_and_refreshes() {
        let backend = FakeBackend::new();
        let session = session_with(use_cases_for(&backend), counting_store());
        let file = temp_image("party.png").await;

        session.open_dialog();
        session.set_fields("Summer Party", "Beach bash");
        session.select_files(std::slice::from_ref(&file)).await.unwrap();

        let outcome = session.submit().await;
        assert_eq!(outcome, SubmitOutcome::Success);

        let records = backend.records.lock().unwrap().clone();
        assert_eq!(records.len(), 1);
        assert!(records[0].id >= 1);
        assert_eq!(records[0].name, "Summer Party");
        assert_eq!(records[0].description.as_deref(), Some("Beach bash"));
        assert!(!records[0].image.path.is_empty());

        let form = session.form();
        assert!(!form.dialog_open);
        assert_eq!(form.state, FormState::Success);
        assert!(form.previews.is_empty());

        assert_eq!(
            session.alerts().current().map(|a| a.message),
            Some("Gallery Created!".to_string())
        );
        assert_eq!(session.galleries().len(), 1);

        tokio::fs::remove_file(file).await.unwrap();
    }

    #[tokio::test]
    async fn test_edit_without_reselect_keeps_stored_path() {
        let backend = FakeBackend::seeded_with(stored_record());
        let store = counting_store();
        let session = session_with(use_cases_for(&backend), Arc::clone(&store));

        session.edit(&stored_record());
        session.set_fields("Summer Party", "A new description");

        let outcome = session.submit().await;
        assert_eq!(outcome, SubmitOutcome::Success);

        let update = backend.last_update.lock().unwrap().clone().unwrap();
        assert_eq!(update.id, 7);
        assert_eq!(update.image_path, "https://cdn.utopia.club/keep.webp");
        assert_eq!(update.description.as_deref(), Some("A new description"));
        assert_eq!(store.puts.load(Ordering::SeqCst), 0);

        assert_eq!(
            session.alerts().current().map(|a| a.message),
            Some("Gallery Updated!".to_string())
        );
    }

    #[tokio::test]
    async fn test_upload_failure_keeps_dialog_open_and_fields() {
        let backend = FakeBackend::new();
        let session = session_with(use_cases_for(&backend), counting_store());
        let file = temp_image("party.png").await;

        session.open_dialog();
        session.set_fields("Summer Party", "Beach bash");
        session.select_files(std::slice::from_ref(&file)).await.unwrap();

        // The file vanishes between selection and submit.
        tokio::fs::remove_file(&file).await.unwrap();

        let outcome = session.submit().await;
        assert_eq!(outcome, SubmitOutcome::UploadFailed);

        let form = session.form();
        assert_eq!(form.state, FormState::Error);
        assert!(form.dialog_open);
        assert_eq!(form.name, "Summer Party");
        assert_eq!(form.previews.len(), 1);

        assert_eq!(backend.create_calls.load(Ordering::SeqCst), 0);
        assert_eq!(
            session.alerts().current().map(|a| a.message),
            Some("Failed to upload image!".to_string())
        );
    }

    #[tokio::test]
    async fn test_close_dialog_mid_submit_cancels_without_side_effects() {
        let backend = FakeBackend::new();
        let started = Arc::new(AtomicUsize::new(0));
        let mut use_cases = use_cases_for(&backend);
        use_cases.create = Arc::new(BlockingCreate {
            started: Arc::clone(&started),
        });
        let session = Arc::new(session_with(use_cases, counting_store()));
        let file = temp_image("party.png").await;

        session.open_dialog();
        session.set_fields("Summer Party", "");
        session.select_files(std::slice::from_ref(&file)).await.unwrap();

        let submitting = {
            let session = Arc::clone(&session);
            tokio::spawn(async move { session.submit().await })
        };
        while started.load(Ordering::SeqCst) == 0 {
            tokio::task::yield_now().await;
        }

        session.close_dialog();

        let outcome = submitting.await.unwrap();
        assert_eq!(outcome, SubmitOutcome::Cancelled);

        assert_eq!(session.form(), GalleryForm::default());
        assert_eq!(session.alerts().current(), None);
        assert!(session.galleries().is_empty());
        assert!(backend.records.lock().unwrap().is_empty());

        tokio::fs::remove_file(file).await.unwrap();
    }

    #[tokio::test]
    async fn test_second_submit_while_busy_is_rejected() {
        let backend = FakeBackend::new();
        let started = Arc::new(AtomicUsize::new(0));
        let mut use_cases = use_cases_for(&backend);
        use_cases.create = Arc::new(BlockingCreate {
            started: Arc::clone(&started),
        });
        let session = Arc::new(session_with(use_cases, counting_store()));
        let file = temp_image("party.png").await;

        session.open_dialog();
        session.set_fields("Summer Party", "");
        session.select_files(std::slice::from_ref(&file)).await.unwrap();

        let submitting = {
            let session = Arc::clone(&session);
            tokio::spawn(async move { session.submit().await })
        };
        while started.load(Ordering::SeqCst) == 0 {
            tokio::task::yield_now().await;
        }

        assert_eq!(session.submit().await, SubmitOutcome::Busy);

        session.close_dialog();
        assert_eq!(submitting.await.unwrap(), SubmitOutcome::Cancelled);

        tokio::fs::remove_file(file).await.unwrap();
    }

    #[tokio::test]
    async fn test_delete_alerts_and_refreshes() {
        let backend = FakeBackend::seeded_with(stored_record());
        let session = session_with(use_cases_for(&backend), counting_store());
        session.refresh().await;
        assert_eq!(session.galleries().len(), 1);

        assert!(session.delete(7).await);
        assert!(session.galleries().is_empty());
        assert_eq!(
            session.alerts().current().map(|a| a.message),
            Some("Gallery Deleted!".to_string())
        );

        // Second delete finds nothing.
        assert!(!session.delete(7).await);
        assert_eq!(
            session.alerts().current().map(|a| a.message),
            Some("Failed to delete Gallery!".to_string())
        );
    }
}
