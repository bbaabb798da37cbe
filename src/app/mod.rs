//! `app` 模組是應用程式的核心。
//!
//! 它負責管理整體狀態、處理使用者輸入（鍵盤、滑鼠），
//! 並把推薦後端回傳的事件套用到畫面模型上。

// --- 子模組宣告 ---

/// `actions` 模組：所有使用者動作的唯一執行入口。
mod actions;
/// `init` 模組：負責 `App` 的建立與初始畫面設定。
mod init;
/// `keyboard` 模組：鍵盤事件對應到動作。
mod keyboard;
/// `language` 模組：語言切換與標記元素的重新渲染。
mod language;
/// `mouse` 模組：滑鼠點擊對應到動作。
mod mouse;
/// `state` 模組：定義 `App` 結構。
mod state;
/// `tick` 模組：定時輪詢推薦後端的事件。
mod tick;

pub use actions::CommandAction;
pub use language::apply_language;
pub use state::App;
