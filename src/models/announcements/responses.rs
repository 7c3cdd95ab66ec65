use super::entities::Announcement;
use crate::models::common::pagination::PaginationInfo;
use serde::Serialize;

// 公告列表响应
#[derive(Debug, Serialize)]
pub struct AnnouncementListResponse {
    pub pagination: PaginationInfo,
    pub items: Vec<Announcement>,
}

// 发布公告结果：公告本体 + 通知触达人数
#[derive(Debug, Serialize)]
pub struct AnnouncementCreatedResponse {
    pub announcement: Announcement,
    pub notified: u64,
}
