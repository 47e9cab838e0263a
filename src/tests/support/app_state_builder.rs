use std::sync::Arc;

use actix_web::web;

use crate::modules::email::application::use_cases::ISendContactMessageUseCase;
use crate::modules::email::application::ContactUseCases;
use crate::modules::event::application::use_cases::{
    ICreateEventUseCase, IDeleteEventUseCase, IGetEventsUseCase, IUpdateEventUseCase,
};
use crate::modules::event::application::EventUseCases;
use crate::modules::gallery::application::gallery_use_cases::GalleryUseCases;
use crate::modules::gallery::application::ports::incoming::use_cases::{
    CreateGalleryUseCase, DeleteGalleryUseCase, GetGalleriesUseCase, UpdateGalleryUseCase,
};
use crate::modules::news::application::use_cases::{
    ICreateNewsUseCase, IDeleteNewsUseCase, IGetNewsUseCase, IUpdateNewsUseCase,
};
use crate::modules::news::application::NewsUseCases;
use crate::modules::partner::application::use_cases::{
    ICreatePartnerUseCase, IDeletePartnerUseCase, IGetPartnersUseCase, IUpdatePartnerUseCase,
};
use crate::modules::partner::application::PartnerUseCases;
use crate::modules::setting::application::use_cases::{IGetSettingsUseCase, IUpdateSettingsUseCase};
use crate::modules::setting::application::SettingUseCases;
use crate::tests::support::stubs;
use crate::AppState;

/// Builds an `AppState` where every use case is a failing stub unless a
/// test swaps in its own mock.
pub struct TestAppStateBuilder {
    state: AppState,
}

impl Default for TestAppStateBuilder {
    fn default() -> Self {
        Self {
            state: AppState {
                gallery: GalleryUseCases {
                    get_list: Arc::new(stubs::StubGetGalleries),
                    create: Arc::new(stubs::StubCreateGallery),
                    update: Arc::new(stubs::StubUpdateGallery),
                    delete: Arc::new(stubs::StubDeleteGallery),
                },
                event: EventUseCases {
                    get_list: Arc::new(stubs::StubGetEvents),
                    create: Arc::new(stubs::StubCreateEvent),
                    update: Arc::new(stubs::StubUpdateEvent),
                    delete: Arc::new(stubs::StubDeleteEvent),
                },
                partner: PartnerUseCases {
                    get_list: Arc::new(stubs::StubGetPartners),
                    create: Arc::new(stubs::StubCreatePartner),
                    update: Arc::new(stubs::StubUpdatePartner),
                    delete: Arc::new(stubs::StubDeletePartner),
                },
                news: NewsUseCases {
                    get_list: Arc::new(stubs::StubGetNews),
                    create: Arc::new(stubs::StubCreateNews),
                    update: Arc::new(stubs::StubUpdateNews),
                    delete: Arc::new(stubs::StubDeleteNews),
                },
                setting: SettingUseCases {
                    get: Arc::new(stubs::StubGetSettings),
                    update: Arc::new(stubs::StubUpdateSettings),
                },
                contact: ContactUseCases {
                    send: Arc::new(stubs::StubSendContact),
                },
            },
        }
    }
}

impl TestAppStateBuilder {
    pub fn with_get_galleries(mut self, uc: impl GetGalleriesUseCase + 'static) -> Self {
        self.state.gallery.get_list = Arc::new(uc);
        self
    }

    pub fn with_create_gallery(mut self, uc: impl CreateGalleryUseCase + 'static) -> Self {
        self.state.gallery.create = Arc::new(uc);
        self
    }

    pub fn with_update_gallery(mut self, uc: impl UpdateGalleryUseCase + 'static) -> Self {
        self.state.gallery.update = Arc::new(uc);
        self
    }

    pub fn with_delete_gallery(mut self, uc: impl DeleteGalleryUseCase + 'static) -> Self {
        self.state.gallery.delete = Arc::new(uc);
        self
    }

    pub fn with_get_events(mut self, uc: impl IGetEventsUseCase + 'static) -> Self {
        self.state.event.get_list = Arc::new(uc);
        self
    }

    pub fn with_create_event(mut self, uc: impl ICreateEventUseCase + 'static) -> Self {
        self.state.event.create = Arc::new(uc);
        self
    }

    pub fn with_update_event(mut self, uc: impl IUpdateEventUseCase + 'static) -> Self {
        self.state.event.update = Arc::new(uc);
        self
    }

    pub fn with_delete_event(mut self, uc: impl IDeleteEventUseCase + 'static) -> Self {
        self.state.event.delete = Arc::new(uc);
        self
    }

    pub fn with_get_partners(mut self, uc: impl IGetPartnersUseCase + 'static) -> Self {
        self.state.partner.get_list = Arc::new(uc);
        self
    }

    pub fn with_create_partner(mut self, uc: impl ICreatePartnerUseCase + 'static) -> Self {
        self.state.partner.create = Arc::new(uc);
        self
    }

    pub fn with_update_partner(mut self, uc: impl IUpdatePartnerUseCase + 'static) -> Self {
        self.state.partner.update = Arc::new(uc);
        self
    }

    pub fn with_delete_partner(mut self, uc: impl IDeletePartnerUseCase + 'static) -> Self {
        self.state.partner.delete = Arc::new(uc);
        self
    }

    pub fn with_get_news(mut self, uc: impl IGetNewsUseCase + 'static) -> Self {
        self.state.news.get_list = Arc::new(uc);
        self
    }

    pub fn with_create_news(mut self, uc: impl ICreateNewsUseCase + 'static) -> Self {
        self.state.news.create = Arc::new(uc);
        self
    }

    pub fn with_update_news(mut self, uc: impl IUpdateNewsUseCase + 'static) -> Self {
        self.state.news.update = Arc::new(uc);
        self
    }

    pub fn with_delete_news(mut self, uc: impl IDeleteNewsUseCase + 'static) -> Self {
        self.state.news.delete = Arc::new(uc);
        self
    }

    pub fn with_get_settings(mut self, uc: impl IGetSettingsUseCase + 'static) -> Self {
        self.state.setting.get = Arc::new(uc);
        self
    }

    pub fn with_update_settings(mut self, uc: impl IUpdateSettingsUseCase + 'static) -> Self {
        self.state.setting.update = Arc::new(uc);
        self
    }

    pub fn with_send_contact(mut self, uc: impl ISendContactMessageUseCase + 'static) -> Self {
        self.state.contact.send = Arc::new(uc);
        self
    }

    pub fn build(self) -> web::Data<AppState> {
        web::Data::new(self.state)
    }
}
