//! Client-side "user" store
//!
//! Holds what a front end knows about the signed-in user and their teams.
//! State starts from [`init::init`], changes only through
//! [`mutations::UserMutation`], and [`actions::mutations_for`] turns Teams
//! API responses into mutations. The `public_profile` module nests inside.

pub mod actions;
pub mod init;
pub mod mutations;
pub mod public_profile;

use serde_json::Value;

pub use actions::{ClientError, TeamsEndpoint};
pub use init::{TeamSummary, UserSnapshot, UserState};
pub use mutations::UserMutation;
pub use public_profile::{PublicProfileModule, PublicProfileMutation};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserModule {
    pub state: UserState,
    pub public_profile: PublicProfileModule,
}

impl Default for UserModule {
    fn default() -> Self {
        Self::new()
    }
}

impl UserModule {
    pub fn new() -> Self {
        Self {
            state: init::init(),
            public_profile: PublicProfileModule::default(),
        }
    }

    pub fn commit(&mut self, mutation: UserMutation) {
        if mutation == UserMutation::Logout {
            self.public_profile = PublicProfileModule::default();
        }
        mutations::apply(&mut self.state, mutation);
    }

    /// Applies a Teams API response body
    ///
    /// A refused request leaves the state untouched and returns its code.
    pub fn handle_response(
        &mut self,
        endpoint: TeamsEndpoint,
        body: &Value,
    ) -> Result<(), ClientError> {
        for mutation in actions::mutations_for(endpoint, body)? {
            self.commit(mutation);
        }
        Ok(())
    }
}
