#![allow(dead_code)]

use std::sync::Mutex;

use devauth::{AuthError, Token, TokenStore};

/// Single-slot in-memory store for orchestration tests.
#[derive(Default)]
pub struct InMemoryTokenStore {
    token: Mutex<Option<Token>>,
}

impl InMemoryTokenStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn seed(&self, token: Token) {
        *self.token.lock().expect("store lock poisoned") = Some(token);
    }

    pub fn get(&self) -> Option<Token> {
        self.token.lock().expect("store lock poisoned").clone()
    }
}

impl TokenStore for InMemoryTokenStore {
    fn load(&self) -> Result<Option<Token>, AuthError> {
        Ok(self.get())
    }

    fn save(&self, token: &Token) -> Result<(), AuthError> {
        *self.token.lock().expect("store lock poisoned") = Some(token.clone());
        Ok(())
    }

    fn clear(&self) -> Result<(), AuthError> {
        *self.token.lock().expect("store lock poisoned") = None;
        Ok(())
    }
}

pub fn token(access_token: &str) -> Token {
    Token {
        access_token: access_token.to_string(),
        refresh_token: None,
        token_type: "Bearer".to_string(),
        expires_in: 3600,
        client_id: "client-123".to_string(),
        client_secret: "secret-456".to_string(),
    }
}
