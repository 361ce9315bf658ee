//! ROIレジストリ
//!
//! 小切手の各記入欄に対応する正規化矩形の静的テーブル。
//! プロセス起動時に固定され、実行中に変化しない。
//! 配列順がそのまま描画順になる（後のエントリが上に重なる）。
//!
//! 座標値はバックエンドの standard プリセットに合わせてある。
//! MICR帯（routing/account）と右上の小切手番号は撮影ガイド用の追加領域。

/// 正規化矩形（フレーム幅・高さに対する割合、各成分 0〜1）
///
/// 不変条件: `x + w <= 1.0`, `y + h <= 1.0`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NormRect {
    pub x: f64,
    pub y: f64,
    pub w: f64,
    pub h: f64,
}

/// ピクセル座標の矩形
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PixelRect {
    pub x: f64,
    pub y: f64,
    pub w: f64,
    pub h: f64,
}

impl NormRect {
    pub const fn new(x: f64, y: f64, w: f64, h: f64) -> Self {
        Self { x, y, w, h }
    }

    /// 面サイズ W×H への投影: `(x·W, y·H, w·W, h·H)`
    pub fn to_pixels(&self, width: f64, height: f64) -> PixelRect {
        PixelRect {
            x: self.x * width,
            y: self.y * height,
            w: self.w * width,
            h: self.h * height,
        }
    }
}

/// 撮影ガイド領域
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Roi {
    /// 安定識別子（抽出サービスのフィールド名と揃える）
    pub id: &'static str,
    /// 表示ラベル
    pub label: &'static str,
    /// 枠・ラベル背景の色 (R, G, B)
    pub color: (u8, u8, u8),
    pub rect: NormRect,
}

impl Roi {
    /// 枠線用の不透明色
    pub fn stroke_color(&self) -> String {
        let (r, g, b) = self.color;
        format!("rgb({}, {}, {})", r, g, b)
    }

    /// ラベル背景用の半透明色
    pub fn fill_color(&self, alpha: f64) -> String {
        let (r, g, b) = self.color;
        format!("rgba({}, {}, {}, {})", r, g, b, alpha)
    }
}

/// 小切手表面の8領域（描画順）
const ROIS: [Roi; 8] = [
    Roi {
        id: "date",
        label: "Date",
        color: (34, 197, 94),
        rect: NormRect::new(0.72, 0.07, 0.24, 0.08),
    },
    Roi {
        id: "payee",
        label: "Payee",
        color: (59, 130, 246),
        rect: NormRect::new(0.12, 0.30, 0.75, 0.10),
    },
    Roi {
        id: "amount_numeric",
        label: "Amount ($)",
        color: (239, 68, 68),
        rect: NormRect::new(0.72, 0.36, 0.24, 0.12),
    },
    Roi {
        id: "amount_words",
        label: "Amount in Words",
        color: (6, 182, 212),
        rect: NormRect::new(0.08, 0.43, 0.82, 0.10),
    },
    Roi {
        id: "memo",
        label: "Memo",
        color: (217, 70, 239),
        rect: NormRect::new(0.12, 0.55, 0.75, 0.08),
    },
    Roi {
        id: "routing_number",
        label: "Routing No.",
        color: (249, 115, 22),
        rect: NormRect::new(0.06, 0.82, 0.24, 0.08),
    },
    Roi {
        id: "account_number",
        label: "Account No.",
        color: (234, 179, 8),
        rect: NormRect::new(0.34, 0.82, 0.28, 0.08),
    },
    Roi {
        id: "check_number",
        label: "Check No.",
        color: (139, 92, 246),
        rect: NormRect::new(0.80, 0.02, 0.16, 0.05),
    },
];

/// 全ROIを描画順で返す（常に同一のスライス）
pub fn list_rois() -> &'static [Roi] {
    &ROIS
}
