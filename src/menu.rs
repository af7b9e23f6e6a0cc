//! メニューループモジュール

use crate::error::InputError;
use crate::input::Prompt;
use crate::interrupt::InterruptFlag;
use crate::runner::{CommandRunner, TrackerRunner};
use crate::ui;
use anyhow::Result;
use std::io::BufRead;
use tracing::debug;

/// メニューのエントリポイント
pub fn run() -> Result<()> {
    let interrupt = InterruptFlag::new();
    interrupt.install_handler()?;

    let prompt = Prompt::stdin(interrupt.clone());
    let runner = TrackerRunner::new(interrupt);
    Menu::new(prompt, runner).run()
}

/// 対話型メニュー
pub struct Menu<R: BufRead, C: CommandRunner> {
    prompt: Prompt<R>,
    runner: C,
}

impl<R: BufRead, C: CommandRunner> Menu<R, C> {
    /// 新しいMenuを作成
    pub fn new(prompt: Prompt<R>, runner: C) -> Self {
        Self { prompt, runner }
    }

    /// メインループを実行
    ///
    /// 「0」が選択されるか、トップレベルのプロンプトで割り込み・
    /// 入力終了を受けるまで繰り返す。どちらも正常終了として返る。
    pub fn run(&mut self) -> Result<()> {
        loop {
            ui::clear_screen();
            ui::print_banner();
            ui::print_main_menu();

            let choice = match self.prompt.read_field("番号を選択してください") {
                Ok(choice) => choice,
                Err(InputError::Interrupted) | Err(InputError::Eof) => {
                    ui::clear_screen();
                    ui::print_notice("ユーザーにより終了しました。");
                    return Ok(());
                }
                Err(e) => return Err(e.into()),
            };

            debug!("メニュー選択: {}", choice);

            if choice == "0" {
                ui::clear_screen();
                ui::print_farewell();
                return Ok(());
            }

            let result = match choice.as_str() {
                "1" => self.list_coins(),
                "2" => self.search_coin(),
                "3" => self.view_details(),
                "4" => self.manage_favorites(),
                "5" => self.watch_favorites(),
                "6" => self.convert_crypto(),
                "7" => self.trending_coins(),
                "8" => self.compare_coins(),
                "9" => self.manage_alerts(),
                "10" => self.export_favorites(),
                "11" => self.settings(),
                _ => self.invalid_option(),
            };

            match result {
                Ok(()) => {}
                Err(InputError::Interrupted) => {
                    ui::print_notice("操作をキャンセルしました。");
                }
                // 入力終了は次のループのトップレベル読み取りで処理される
                Err(InputError::Eof) => {}
                Err(e) => return Err(e.into()),
            }
        }
    }

    /// 上位の仮想通貨を一覧表示
    fn list_coins(&mut self) -> Result<(), InputError> {
        ui::clear_screen();
        ui::print_title("上位の仮想通貨を一覧表示");

        let count = self.prompt.read_field_or("表示する通貨数", "50")?;
        let currency = self.prompt.read_field_or("通貨 (usd/eur/gbp/try)", "usd")?;
        let sort_field = self
            .prompt
            .read_field_or("ソート項目 (market_cap/price/volume/change)", "market_cap")?;
        let descending = self.prompt.read_field_or("降順で表示しますか? (y/n)", "y")?;

        let mut args = tokens(&["list", "-n", &count, "-c", &currency, "-s", &sort_field]);
        if descending.to_lowercase() == "y" {
            args.push("--desc".to_string());
        }

        println!();
        self.runner.run(&args);
        self.prompt.pause()
    }

    /// 仮想通貨を検索
    fn search_coin(&mut self) -> Result<(), InputError> {
        ui::clear_screen();
        ui::print_title("仮想通貨を検索");

        let query = self.prompt.read_field("通貨名またはシンボル")?;
        if query.is_empty() {
            ui::print_error("検索キーワードを入力してください。");
            return self.prompt.pause();
        }

        let currency = self.prompt.read_field_or("価格表示の通貨", "usd")?;

        println!();
        self.runner.run(&tokens(&["search", &query, "-c", &currency]));
        self.prompt.pause()
    }

    /// コインの詳細を表示
    fn view_details(&mut self) -> Result<(), InputError> {
        ui::clear_screen();
        ui::print_title("コインの詳細を表示");

        let coin_id = self.prompt.read_field("コインID (例: bitcoin, ethereum)")?;
        if coin_id.is_empty() {
            ui::print_error("コインIDを入力してください。");
            return self.prompt.pause();
        }

        let currency = self.prompt.read_field_or("通貨", "usd")?;

        println!();
        self.runner.run(&tokens(&["detail", &coin_id, "-c", &currency]));
        self.prompt.pause()
    }

    /// お気に入り管理のサブループ
    fn manage_favorites(&mut self) -> Result<(), InputError> {
        loop {
            ui::clear_screen();
            ui::print_title("お気に入り管理");
            ui::print_favorites_menu();

            let choice = self.prompt.read_field("番号を選択してください")?;
            match choice.as_str() {
                "1" => {
                    let currency = self.prompt.read_field_or("通貨", "usd")?;
                    println!();
                    self.runner.run(&tokens(&["favorites", "-c", &currency]));
                    self.prompt.pause()?;
                }
                "2" => {
                    let coin_id = self.prompt.read_field("追加するコインID")?;
                    if !coin_id.is_empty() {
                        println!();
                        self.runner.run(&tokens(&["add", &coin_id]));
                        self.prompt.pause()?;
                    }
                }
                "3" => {
                    let coin_id = self.prompt.read_field("削除するコインID")?;
                    if !coin_id.is_empty() {
                        println!();
                        self.runner.run(&tokens(&["remove", &coin_id]));
                        self.prompt.pause()?;
                    }
                }
                "0" => return Ok(()),
                _ => {}
            }
        }
    }

    /// お気に入りをリアルタイム監視
    fn watch_favorites(&mut self) -> Result<(), InputError> {
        ui::clear_screen();
        ui::print_title("お気に入りをリアルタイム監視");
        ui::print_notice("Ctrl+Cで監視を終了します");
        println!();

        let interval = self.prompt.read_field_or("更新間隔（秒）", "60")?;
        let currency = self.prompt.read_field_or("通貨", "usd")?;

        println!();
        self.runner
            .run(&tokens(&["watch", "-i", &interval, "-c", &currency]));
        self.prompt.pause()
    }

    /// 仮想通貨を換算
    fn convert_crypto(&mut self) -> Result<(), InputError> {
        ui::clear_screen();
        ui::print_title("仮想通貨を換算");

        let amount = self.prompt.read_field("数量")?;
        let from_coin = self.prompt.read_field("変換元 (例: btc)")?;
        let to_coin = self.prompt.read_field("変換先 (例: eth)")?;

        if amount.is_empty() || from_coin.is_empty() || to_coin.is_empty() {
            ui::print_error("すべての項目を入力してください。");
            return self.prompt.pause();
        }

        println!();
        self.runner
            .run(&tokens(&["convert", &amount, &from_coin, &to_coin]));
        self.prompt.pause()
    }

    /// トレンドコインを表示
    fn trending_coins(&mut self) -> Result<(), InputError> {
        ui::clear_screen();
        ui::print_title("トレンドコイン");

        self.runner.run(&tokens(&["trending"]));
        self.prompt.pause()
    }

    /// 2つのコインを比較
    fn compare_coins(&mut self) -> Result<(), InputError> {
        ui::clear_screen();
        ui::print_title("2つのコインを比較");

        let coin1 = self.prompt.read_field("1つ目のコインID (例: bitcoin)")?;
        let coin2 = self.prompt.read_field("2つ目のコインID (例: ethereum)")?;
        let currency = self.prompt.read_field_or("通貨", "usd")?;

        if coin1.is_empty() || coin2.is_empty() {
            ui::print_error("コインIDを2つとも入力してください。");
            return self.prompt.pause();
        }

        println!();
        self.runner
            .run(&tokens(&["compare", &coin1, &coin2, "-c", &currency]));
        self.prompt.pause()
    }

    /// 価格アラート管理のサブループ
    fn manage_alerts(&mut self) -> Result<(), InputError> {
        loop {
            ui::clear_screen();
            ui::print_title("価格アラート管理");
            ui::print_alerts_menu();

            let choice = self.prompt.read_field("番号を選択してください")?;
            match choice.as_str() {
                "1" => {
                    println!();
                    self.runner.run(&tokens(&["alert", "list"]));
                    self.prompt.pause()?;
                }
                "2" => {
                    let coin_id = self.prompt.read_field("コインID")?;
                    let currency = self.prompt.read_field_or("通貨", "usd")?;
                    let alert_type = self.prompt.read_field("種別 (above/below)")?;
                    let price = self.prompt.read_field("価格しきい値")?;

                    if !coin_id.is_empty() && !alert_type.is_empty() && !price.is_empty() {
                        println!();
                        self.runner.run(&tokens(&[
                            "alert",
                            "add",
                            &coin_id,
                            "-c",
                            &currency,
                            "-t",
                            &alert_type,
                            "-p",
                            &price,
                        ]));
                        self.prompt.pause()?;
                    }
                }
                "3" => {
                    let coin_id = self.prompt.read_field("コインID")?;
                    let currency = self.prompt.read_field_or("通貨", "usd")?;
                    let alert_type = self.prompt.read_field("種別 (above/below、空欄で両方)")?;

                    if !coin_id.is_empty() {
                        let mut args = tokens(&["alert", "remove", &coin_id, "-c", &currency]);
                        if !alert_type.is_empty() {
                            args.push("-t".to_string());
                            args.push(alert_type);
                        }
                        println!();
                        self.runner.run(&args);
                        self.prompt.pause()?;
                    }
                }
                "0" => return Ok(()),
                _ => {}
            }
        }
    }

    /// お気に入りをCSVエクスポート
    fn export_favorites(&mut self) -> Result<(), InputError> {
        ui::clear_screen();
        ui::print_title("お気に入りをCSVエクスポート");

        let currency = self.prompt.read_field_or("通貨", "usd")?;
        let output = self.prompt.read_field("出力ファイル（空欄で自動生成）")?;

        let mut args = tokens(&["export", "-c", &currency]);
        if !output.is_empty() {
            args.push("-o".to_string());
            args.push(output);
        }

        println!();
        self.runner.run(&args);
        self.prompt.pause()
    }

    /// 設定情報を表示
    ///
    /// このメニュー自身は設定を持たない。トラッカーツール側の
    /// デフォルト設定を案内するだけで、コマンドは実行しない。
    fn settings(&mut self) -> Result<(), InputError> {
        ui::clear_screen();
        ui::print_title("設定");

        ui::print_notice("現在の設定:");
        println!("  - デフォルト通貨: USD");
        println!("  - デフォルトソート: 時価総額");
        println!("  - キャッシュTTL: 60秒");
        println!();
        ui::print_notice("設定を変更するにはトラッカーツール側の設定ファイルを編集してください。");
        self.prompt.pause()
    }

    /// 無効な選択への応答
    fn invalid_option(&mut self) -> Result<(), InputError> {
        ui::print_error("無効な選択です。もう一度お試しください。");
        self.prompt.pause()
    }
}

/// 文字列スライスからコマンドのトークン列を作成
fn tokens(parts: &[&str]) -> Vec<String> {
    parts.iter().map(|s| s.to_string()).collect()
}
