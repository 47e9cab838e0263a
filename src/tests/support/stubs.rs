//! Default use-case stubs for route tests. Every stub fails loudly, so a
//! test touching an endpoint it did not configure gets a clear signal.

use async_trait::async_trait;

use crate::modules::email::application::use_cases::{
    ContactMessage, ISendContactMessageUseCase, SendContactMessageError,
};
use crate::modules::event::application::ports::outgoing::{
    CreateEventData, EventRecord, UpdateEventData,
};
use crate::modules::event::application::use_cases::{
    CreateEventError, DeleteEventError, GetEventsError, ICreateEventUseCase, IDeleteEventUseCase,
    IGetEventsUseCase, IUpdateEventUseCase, UpdateEventError,
};
use crate::modules::gallery::application::ports::incoming::use_cases::{
    CreateGalleryError, CreateGalleryUseCase, DeleteGalleryError, DeleteGalleryUseCase,
    GetGalleriesError, GetGalleriesUseCase, UpdateGalleryError, UpdateGalleryUseCase,
};
use crate::modules::gallery::application::ports::outgoing::{
    CreateGalleryData, GalleryRecord, UpdateGalleryData,
};
use crate::modules::news::application::ports::outgoing::{
    CreateNewsData, NewsRecord, UpdateNewsData,
};
use crate::modules::news::application::use_cases::{
    CreateNewsError, DeleteNewsError, GetNewsError, ICreateNewsUseCase, IDeleteNewsUseCase,
    IGetNewsUseCase, IUpdateNewsUseCase, UpdateNewsError,
};
use crate::modules::partner::application::ports::outgoing::{
    CreatePartnerData, PartnerRecord, UpdatePartnerData,
};
use crate::modules::partner::application::use_cases::{
    CreatePartnerError, DeletePartnerError, GetPartnersError, ICreatePartnerUseCase,
    IDeletePartnerUseCase, IGetPartnersUseCase, IUpdatePartnerUseCase, UpdatePartnerError,
};
use crate::modules::setting::application::ports::outgoing::{SettingsData, SiteSettings};
use crate::modules::setting::application::use_cases::{
    GetSettingsError, IGetSettingsUseCase, IUpdateSettingsUseCase, UpdateSettingsError,
};

const NOT_WIRED: &str = "use case not wired in this test";

pub struct StubGetGalleries;
pub struct StubCreateGallery;
pub struct StubUpdateGallery;
pub struct StubDeleteGallery;
pub struct StubGetEvents;
pub struct StubCreateEvent;
pub struct StubUpdateEvent;
pub struct StubDeleteEvent;
pub struct StubGetPartners;
pub struct StubCreatePartner;
pub struct StubUpdatePartner;
pub struct StubDeletePartner;
pub struct StubGetNews;
pub struct StubCreateNews;
pub struct StubUpdateNews;
pub struct StubDeleteNews;
pub struct StubGetSettings;
pub struct StubUpdateSettings;
pub struct StubSendContact;

#[async_trait]
impl GetGalleriesUseCase for StubGetGalleries {
    async fn execute(&self) -> Result<Vec<GalleryRecord>, GetGalleriesError> {
        Err(GetGalleriesError::RepositoryError(NOT_WIRED.to_string()))
    }
}

#[async_trait]
impl CreateGalleryUseCase for StubCreateGallery {
    async fn execute(&self, _data: CreateGalleryData) -> Result<GalleryRecord, CreateGalleryError> {
        Err(CreateGalleryError::RepositoryError(NOT_WIRED.to_string()))
    }
}

#[async_trait]
impl UpdateGalleryUseCase for StubUpdateGallery {
    async fn execute(&self, _data: UpdateGalleryData) -> Result<GalleryRecord, UpdateGalleryError> {
        Err(UpdateGalleryError::RepositoryError(NOT_WIRED.to_string()))
    }
}

#[async_trait]
impl DeleteGalleryUseCase for StubDeleteGallery {
    async fn execute(&self, _id: i32) -> Result<(), DeleteGalleryError> {
        Err(DeleteGalleryError::RepositoryError(NOT_WIRED.to_string()))
    }
}

#[async_trait]
impl IGetEventsUseCase for StubGetEvents {
    async fn execute(&self) -> Result<Vec<EventRecord>, GetEventsError> {
        Err(GetEventsError::RepositoryError(NOT_WIRED.to_string()))
    }
}

#[async_trait]
impl ICreateEventUseCase for StubCreateEvent {
    async fn execute(&self, _data: CreateEventData) -> Result<EventRecord, CreateEventError> {
        Err(CreateEventError::RepositoryError(NOT_WIRED.to_string()))
    }
}

#[async_trait]
impl IUpdateEventUseCase for StubUpdateEvent {
    async fn execute(&self, _data: UpdateEventData) -> Result<EventRecord, UpdateEventError> {
        Err(UpdateEventError::RepositoryError(NOT_WIRED.to_string()))
    }
}

#[async_trait]
impl IDeleteEventUseCase for StubDeleteEvent {
    async fn execute(&self, _id: i32) -> Result<(), DeleteEventError> {
        Err(DeleteEventError::RepositoryError(NOT_WIRED.to_string()))
    }
}

#[async_trait]
impl IGetPartnersUseCase for StubGetPartners {
    async fn execute(&self) -> Result<Vec<PartnerRecord>, GetPartnersError> {
        Err(GetPartnersError::RepositoryError(NOT_WIRED.to_string()))
    }
}

#[async_trait]
impl ICreatePartnerUseCase for StubCreatePartner {
    async fn execute(&self, _data: CreatePartnerData) -> Result<PartnerRecord, CreatePartnerError> {
        Err(CreatePartnerError::RepositoryError(NOT_WIRED.to_string()))
    }
}

#[async_trait]
impl IUpdatePartnerUseCase for StubUpdatePartner {
    async fn execute(&self, _data: UpdatePartnerData) -> Result<PartnerRecord, UpdatePartnerError> {
        Err(UpdatePartnerError::RepositoryError(NOT_WIRED.to_string()))
    }
}

#[async_trait]
impl IDeletePartnerUseCase for StubDeletePartner {
    async fn execute(&self, _id: i32) -> Result<(), DeletePartnerError> {
        Err(DeletePartnerError::RepositoryError(NOT_WIRED.to_string()))
    }
}

#[async_trait]
impl IGetNewsUseCase for StubGetNews {
    async fn execute(&self) -> Result<Vec<NewsRecord>, GetNewsError> {
        Err(GetNewsError::RepositoryError(NOT_WIRED.to_string()))
    }
}

#[async_trait]
impl ICreateNewsUseCase for StubCreateNews {
    async fn execute(&self, _data: CreateNewsData) -> Result<NewsRecord, CreateNewsError> {
        Err(CreateNewsError::RepositoryError(NOT_WIRED.to_string()))
    }
}

#[async_trait]
impl IUpdateNewsUseCase for StubUpdateNews {
    async fn execute(&self, _data: UpdateNewsData) -> Result<NewsRecord, UpdateNewsError> {
        Err(UpdateNewsError::RepositoryError(NOT_WIRED.to_string()))
    }
}

#[async_trait]
impl IDeleteNewsUseCase for StubDeleteNews {
    async fn execute(&self, _id: i32) -> Result<(), DeleteNewsError> {
        Err(DeleteNewsError::RepositoryError(NOT_WIRED.to_string()))
    }
}

#[async_trait]
impl IGetSettingsUseCase for StubGetSettings {
    async fn execute(&self) -> Result<SiteSettings, GetSettingsError> {
        Err(GetSettingsError::RepositoryError(NOT_WIRED.to_string()))
    }
}

#[async_trait]
impl IUpdateSettingsUseCase for StubUpdateSettings {
    async fn execute(&self, _data: SettingsData) -> Result<SiteSettings, UpdateSettingsError> {
        Err(UpdateSettingsError::RepositoryError(NOT_WIRED.to_string()))
    }
}

#[async_trait]
impl ISendContactMessageUseCase for StubSendContact {
    async fn execute(&self, _message: ContactMessage) -> Result<(), SendContactMessageError> {
        Err(SendContactMessageError::SendFailed(NOT_WIRED.to_string()))
    }
}
