//! # Geometry 模块
//!
//! 网格坐标到像素坐标的换算。
//!
//! 宿主控件以左上角定位，唯独物品槽以中心点定位，
//! 因此物品槽单独计算锚点。

use serde::{Deserialize, Serialize};

use crate::manifest::{TilePos, TileSize};

/// 每格像素数
pub const TILE_SCALE: i32 = 16;

/// 物品槽锚点的横向修正（单位：格）
pub const ITEM_OFFSET_X: f32 = -2.5;

/// 物品槽锚点的纵向修正（单位：格）
pub const ITEM_OFFSET_Y: f32 = -2.8;

/// 像素矩形（左上角 + 尺寸）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PixelRect {
    pub x: i32,
    pub y: i32,
    pub w: i32,
    pub h: i32,
}

impl PixelRect {
    pub fn new(x: i32, y: i32, w: i32, h: i32) -> Self {
        Self { x, y, w, h }
    }

    /// 组件占用区域
    pub fn from_tiles(offset: TilePos, size: TileSize) -> Self {
        Self {
            x: offset.x * TILE_SCALE,
            y: offset.y * TILE_SCALE,
            w: size.w * TILE_SCALE,
            h: size.h * TILE_SCALE,
        }
    }

    /// 四边各向内收缩 `by` 像素
    pub fn inset(self, by: i32) -> Self {
        Self {
            x: self.x + by,
            y: self.y + by,
            w: self.w - 2 * by,
            h: self.h - 2 * by,
        }
    }
}

/// 像素点
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PixelPoint {
    pub x: f32,
    pub y: f32,
}

/// 标签文本框：四边各收缩半格，使文字在格子内居中
pub fn label_rect(offset: TilePos, size: TileSize) -> PixelRect {
    PixelRect::from_tiles(offset, size).inset(TILE_SCALE / 2)
}

/// 物品槽锚点：占用区域中心，再加固定修正
pub fn item_slot_anchor(offset: TilePos, size: TileSize) -> PixelPoint {
    let scale = TILE_SCALE as f32;
    PixelPoint {
        x: (offset.x as f32 + size.w as f32 / 2.0 + ITEM_OFFSET_X) * scale,
        y: (offset.y as f32 + size.h as f32 / 2.0 + ITEM_OFFSET_Y) * scale,
    }
}
