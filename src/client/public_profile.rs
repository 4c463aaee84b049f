use serde::{Deserialize, Serialize};

/// What other people can see on the user's public profile
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PublicProfileSettings {
    pub show_name: bool,
    pub show_username: bool,
    pub show_teams: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PublicProfileState {
    pub visible: bool,
    pub settings: PublicProfileSettings,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PublicProfileMutation {
    SetVisibility(bool),
    SetSettings(PublicProfileSettings),
}

/// Nested `public_profile` module of the user store
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PublicProfileModule {
    pub state: PublicProfileState,
}

impl PublicProfileModule {
    pub fn commit(&mut self, mutation: PublicProfileMutation) {
        match mutation {
            PublicProfileMutation::SetVisibility(visible) => self.state.visible = visible,
            PublicProfileMutation::SetSettings(settings) => self.state.settings = settings,
        }
    }
}
