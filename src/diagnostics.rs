//! Diagnostics Module
//!
//! ロード処理の診断出力を受け取るシンクを定義するモジュール。
//! ローダーはプロセス全体のロギング設定に触れず、注入されたシンクにのみ出力します。

use std::sync::Mutex;
use tracing::Level;

/// 診断出力の送り先
pub trait DiagnosticSink: Send + Sync {
    /// レベル付きのログメッセージを記録
    fn log(&self, level: Level, message: &str);

    /// 利用者向けの報告行（ロード件数、列名）を出力
    fn report(&self, line: &str);
}

/// デフォルトのシンク
///
/// ログは`tracing`のイベントとして、報告行は標準出力へ出力します。
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingSink;

impl DiagnosticSink for TracingSink {
    fn log(&self, level: Level, message: &str) {
        match level {
            Level::ERROR => tracing::error!("{}", message),
            Level::WARN => tracing::warn!("{}", message),
            Level::INFO => tracing::info!("{}", message),
            Level::DEBUG => tracing::debug!("{}", message),
            _ => tracing::trace!("{}", message),
        }
    }

    fn report(&self, line: &str) {
        println!("{}", line);
    }
}

/// 診断出力をメモリに保持するシンク
///
/// 呼び出し側で`Arc`を共有し、ロード後に内容を確認する用途を想定しています。
#[derive(Debug, Default)]
pub struct MemorySink {
    logs: Mutex<Vec<(Level, String)>>,
    reports: Mutex<Vec<String>>,
}

impl MemorySink {
    /// 空のシンクを生成
    pub fn new() -> Self {
        Self::default()
    }

    /// 記録されたログ
    pub fn logs(&self) -> Vec<(Level, String)> {
        self.logs.lock().map(|l| l.clone()).unwrap_or_default()
    }

    /// 指定レベルのログメッセージ
    pub fn messages_at(&self, level: Level) -> Vec<String> {
        self.logs()
            .into_iter()
            .filter(|(l, _)| *l == level)
            .map(|(_, m)| m)
            .collect()
    }

    /// 出力された報告行
    pub fn reports(&self) -> Vec<String> {
        self.reports.lock().map(|r| r.clone()).unwrap_or_default()
    }
}

impl DiagnosticSink for MemorySink {
    fn log(&self, level: Level, message: &str) {
        if let Ok(mut logs) = self.logs.lock() {
            logs.push((level, message.to_string()));
        }
    }

    fn report(&self, line: &str) {
        if let Ok(mut reports) = self.reports.lock() {
            reports.push(line.to_string());
        }
    }
}
