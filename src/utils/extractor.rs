//! 路径参数提取器
//!
//! 路径段不是整数时直接返回 400，不进入业务层。

use std::future::{Ready, ready};

use actix_web::{
    Error, FromRequest, HttpRequest, HttpResponse, dev::Payload, error::InternalError,
};

use crate::models::MessageResponse;

/// 课程 ID，来自路径参数 `{course_id}`
///
/// 合法整数但超出 INTEGER 列范围时为 `None`，这样的课程一定不存在。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SafeCourseId(pub Option<i32>);

impl SafeCourseId {
    pub const PARAM: &'static str = "course_id";

    fn parse(raw: &str) -> Result<Self, String> {
        let digits = raw.strip_prefix('-').unwrap_or(raw);
        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return Err(format!("Invalid course id: {raw}"));
        }

        Ok(SafeCourseId(raw.parse::<i32>().ok()))
    }
}

impl FromRequest for SafeCourseId {
    type Error = Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let raw = req.match_info().get(Self::PARAM).unwrap_or_default();

        ready(Self::parse(raw).map_err(|message| {
            let response = HttpResponse::BadRequest().json(MessageResponse::new(message.clone()));
            InternalError::from_response(message, response).into()
        }))
    }
}
