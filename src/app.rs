use eframe::egui::{self, RichText};

use crate::columns::COLUMNS;
use crate::config::ViewerConfig;
use crate::model::ResultRow;

const COLUMN_MIN_WIDTH: f32 = 200.0;

/// 読み込み済みの行を2列テーブルで表示するだけのアプリ
pub struct ResultsApp {
    rows: Vec<ResultRow>,
}

impl ResultsApp {
    pub fn new(rows: Vec<ResultRow>) -> Self {
        Self { rows }
    }

    pub fn show(&self, ctx: &egui::Context) {
        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::both()
                .auto_shrink([false, false])
                .show(ui, |ui| self.render_table(ui));
        });
    }

    /// 見出し行と、読み込み順の各行のセル文字列
    fn table_text(&self) -> Vec<[&str; 2]> {
        let header = COLUMNS.map(|c| c.header);
        std::iter::once(header)
            .chain(self.rows.iter().map(|row| COLUMNS.map(|c| c.cell(row))))
            .collect()
    }

    fn render_table(&self, ui: &mut egui::Ui) {
        let mut lines = self.table_text().into_iter();
        egui::Grid::new("results_table")
            .num_columns(COLUMNS.len())
            .striped(true)
            .min_col_width(COLUMN_MIN_WIDTH)
            .show(ui, |ui| {
                if let Some(header) = lines.next() {
                    for text in header {
                        ui.label(RichText::new(text).strong());
                    }
                    ui.end_row();
                }

                for cells in lines {
                    for text in cells {
                        ui.label(text);
                    }
                    ui.end_row();
                }
            });
    }
}

impl eframe::App for ResultsApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.show(ctx);
    }
}

pub fn native_options(config: &ViewerConfig) -> eframe::NativeOptions {
    eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size(config.window_size)
            .with_title(config.window_title.clone()),
        ..Default::default()
    }
}

/// ウィンドウを開き、閉じられるまでブロックする
pub fn render_window(rows: Vec<ResultRow>, config: &ViewerConfig) -> eframe::Result<()> {
    tracing::info!(rows = rows.len(), "opening results window");
    eframe::run_native(
        &config.window_title,
        native_options(config),
        Box::new(move |_cc| Box::new(ResultsApp::new(rows))),
    )
}
