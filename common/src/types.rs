//! 基本型
//!
//! 撮影画像はJPEGのData URL（`data:image/jpeg;base64,...`）のまま
//! セッションに保持し、そのままOCRサービスへ送信する。

use serde::{Deserialize, Serialize};

/// 小切手の面
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    #[default]
    Front,
    Back,
}

impl Side {
    pub fn as_str(&self) -> &'static str {
        match self {
            Side::Front => "front",
            Side::Back => "back",
        }
    }
}
