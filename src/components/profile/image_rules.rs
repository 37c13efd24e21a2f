//! 업로드 전 로컬 이미지 검증
//!
//! 용량과 해상도 검사를 모두 통과한 파일만 네트워크로 나간다.
//! 해상도는 업로드 전에 파일을 브라우저에서 디코딩해 확인한다.

/// 용량 제한 (1MB)
pub const MAX_BYTES: f64 = 1024.0 * 1024.0;
/// 해상도 하한 (px)
pub const MIN_EDGE: u32 = 500;
/// 해상도 상한 (px)
pub const MAX_EDGE: u32 = 1000;

/// 검증 실패 사유
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageRuleError {
    /// 1MB 초과
    TooLarge,
    /// 어느 한 변이라도 500~1000px 범위 밖
    BadResolution,
    /// 브라우저가 파일을 이미지로 디코딩하지 못함
    Unreadable,
}

impl ImageRuleError {
    pub fn message(&self) -> &'static str {
        match self {
            ImageRuleError::TooLarge => "이미지 용량은 1MB 이하여야 합니다.",
            ImageRuleError::BadResolution => "이미지 해상도는 500~1000px 정사각형이어야 합니다.",
            ImageRuleError::Unreadable => "이미지를 읽을 수 없습니다.",
        }
    }
}

/// 용량 규칙 (바이트)
pub fn check_size(bytes: f64) -> Result<(), ImageRuleError> {
    if bytes > MAX_BYTES {
        Err(ImageRuleError::TooLarge)
    } else {
        Ok(())
    }
}

/// 해상도 규칙: 양 변 모두 500~1000px
pub fn check_dimensions(width: u32, height: u32) -> Result<(), ImageRuleError> {
    if width < MIN_EDGE || height < MIN_EDGE || width > MAX_EDGE || height > MAX_EDGE {
        Err(ImageRuleError::BadResolution)
    } else {
        Ok(())
    }
}

/// 파일을 디코딩해 실제 해상도를 얻는다
///
/// object URL을 `HtmlImageElement`에 물리고 load/error 이벤트를 oneshot
/// 채널로 future에 연결한다.
pub async fn probe_dimensions(file: &web_sys::File) -> Result<(u32, u32), ImageRuleError> {
    use futures::channel::oneshot;
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::JsCast;
    use wasm_bindgen::closure::Closure;

    let url = web_sys::Url::create_object_url_with_blob(file)
        .map_err(|_| ImageRuleError::Unreadable)?;
    let image = web_sys::HtmlImageElement::new().map_err(|_| ImageRuleError::Unreadable)?;

    let (sender, receiver) = oneshot::channel::<bool>();
    let sender = Rc::new(RefCell::new(Some(sender)));

    let onload = {
        let sender = sender.clone();
        Closure::<dyn FnMut()>::new(move || {
            if let Some(sender) = sender.borrow_mut().take() {
                let _ = sender.send(true);
            }
        })
    };
    let onerror = {
        let sender = sender.clone();
        Closure::<dyn FnMut()>::new(move || {
            if let Some(sender) = sender.borrow_mut().take() {
                let _ = sender.send(false);
            }
        })
    };

    image.set_onload(Some(onload.as_ref().unchecked_ref()));
    image.set_onerror(Some(onerror.as_ref().unchecked_ref()));
    image.set_src(&url);

    let loaded = receiver.await.unwrap_or(false);
    let _ = web_sys::Url::revoke_object_url(&url);

    if loaded {
        Ok((image.width(), image.height()))
    } else {
        Err(ImageRuleError::Unreadable)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn size_rule_rejects_only_above_one_megabyte() {
        assert!(check_size(0.0).is_ok());
        assert!(check_size(MAX_BYTES).is_ok());
        assert_eq!(check_size(MAX_BYTES + 1.0), Err(ImageRuleError::TooLarge));
    }

    #[test]
    fn dimension_rule_bounds_are_inclusive() {
        assert!(check_dimensions(500, 500).is_ok());
        assert!(check_dimensions(1000, 1000).is_ok());
        assert!(check_dimensions(750, 600).is_ok());
    }

    #[test]
    fn dimension_rule_rejects_out_of_range_edges() {
        assert_eq!(
            check_dimensions(499, 700),
            Err(ImageRuleError::BadResolution)
        );
        assert_eq!(
            check_dimensions(700, 499),
            Err(ImageRuleError::BadResolution)
        );
        assert_eq!(
            check_dimensions(1001, 700),
            Err(ImageRuleError::BadResolution)
        );
        assert_eq!(
            check_dimensions(700, 1001),
            Err(ImageRuleError::BadResolution)
        );
    }

    #[test]
    fn rule_messages_match_the_product_strings() {
        assert_eq!(
            ImageRuleError::TooLarge.message(),
            "이미지 용량은 1MB 이하여야 합니다."
        );
        assert_eq!(
            ImageRuleError::BadResolution.message(),
            "이미지 해상도는 500~1000px 정사각형이어야 합니다."
        );
    }
}
