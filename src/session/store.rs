//! 세션 토큰 저장소
//!
//! localStorage의 `token` 키 하나가 공유 자원이다. 읽기는 모든 요청이,
//! 쓰기는 login(저장)과 logout(삭제)만 한다.

use gloo_storage::{LocalStorage, Storage};

pub const TOKEN_KEY: &str = "token";

/// 토큰 저장소 심
pub trait TokenStore: Clone {
    fn load(&self) -> Option<String>;
    fn save(&self, token: &str);
    fn clear(&self);
}

/// localStorage 기반 프로덕션 저장소
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserTokens;

impl TokenStore for BrowserTokens {
    fn load(&self) -> Option<String> {
        LocalStorage::get::<String>(TOKEN_KEY)
            .ok()
            .filter(|token| !token.is_empty())
    }

    fn save(&self, token: &str) {
        let _ = LocalStorage::set(TOKEN_KEY, token);
    }

    fn clear(&self) {
        LocalStorage::delete(TOKEN_KEY);
    }
}

/// 공유 셀 기반 테스트 저장소
#[cfg(test)]
#[derive(Clone, Default)]
pub struct MemoryTokens(std::rc::Rc<std::cell::RefCell<Option<String>>>);

#[cfg(test)]
impl MemoryTokens {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_token(token: &str) -> Self {
        let store = Self::default();
        store.save(token);
        store
    }

    pub fn get(&self) -> Option<String> {
        self.0.borrow().clone()
    }
}

#[cfg(test)]
impl TokenStore for MemoryTokens {
    fn load(&self) -> Option<String> {
        self.0.borrow().clone()
    }

    fn save(&self, token: &str) {
        *self.0.borrow_mut() = Some(token.to_string());
    }

    fn clear(&self) {
        *self.0.borrow_mut() = None;
    }
}
