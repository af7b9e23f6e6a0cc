//! Crypto Tracker CLI向け対話型メニュー
//!
//! 入力を集めて外部のトラッカーツール（crypto）に引数として渡すだけの
//! ラッパー。データ取得や保存はすべてツール側が行う。

mod error;
mod input;
mod interrupt;
mod logging;
mod menu;
mod runner;
mod ui;

use anyhow::Result;

fn main() -> Result<()> {
    logging::init();
    menu::run()
}
