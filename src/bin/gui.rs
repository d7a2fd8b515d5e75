#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

//! eframe/egui 기반 데스크톱 GUI 진입점.

use eframe::{egui, App, Frame};
use image::GenericImageView;
use pavement_engineering_toolbox::{
    config, conversion,
    dataset::{self, Dataset},
    i18n,
    isoline::{Engine, RejectedPair},
    quantity::QuantityKind,
    units::{convert_length, convert_modulus, LengthUnit, ModulusUnit},
};
use rfd::FileDialog;
use std::{env, fs, path::Path};

fn main() -> Result<(), eframe::Error> {
    // CLI 언어 옵션 처리: --lang xx 또는 --lang=xx (xx: auto/en-us/ko-kr/ko/bg-bg/bg)
    let mut cli_lang: Option<String> = None;
    let args: Vec<String> = env::args().collect();
    let mut i = 1;
    while i < args.len() {
        let a = &args[i];
        if let Some(val) = a.strip_prefix("--lang=") {
            cli_lang = Some(val.to_string());
        } else if a == "--lang" || a == "-L" {
            if i + 1 < args.len() {
                cli_lang = Some(args[i + 1].clone());
                i += 1;
            }
        }
        i += 1;
    }

    let icon_data = load_app_icon();
    let mut viewport = egui::ViewportBuilder::default()
        .with_always_on_top()
        .with_transparent(true);
    if let Some(icon) = icon_data.clone() {
        viewport = viewport.with_icon(icon);
    }
    let cfg = eframe::NativeOptions {
        viewport,
        ..Default::default()
    };
    let mut app_cfg = config::load_or_default().unwrap_or_default();
    if let Some(lang_cli) = cli_lang {
        let resolved = i18n::resolve_language(&lang_cli, Some(app_cfg.language.as_str()));
        app_cfg.language = resolved;
    }
    eframe::run_native(
        "Pavement Engineering Toolbox",
        cfg,
        Box::new(move |cc| {
            if let Err(e) = setup_fonts(&cc.egui_ctx) {
                eprintln!("Font error: {e}");
            }
            Box::new(GuiApp::new(app_cfg.clone()))
        }),
    )
}

fn load_app_icon() -> Option<egui::IconData> {
    let search = [
        "PE_Cal.png",
        "icon.png",
        "assets/icon.png",
        "../PE_Cal.png",
        "../../PE_Cal.png",
    ];
    let path = search
        .iter()
        .find(|p| Path::new(*p).exists())
        .map(|s| s.to_string())?;
    let bytes = fs::read(&path).ok()?;
    let img = image::load_from_memory(&bytes).ok()?;
    let rgba = img.to_rgba8();
    let (w, h) = img.dimensions();
    Some(egui::IconData {
        rgba: rgba.into_raw(),
        width: w,
        height: h,
    })
}

fn label_with_tip(ui: &mut egui::Ui, text: &str, tip: &str) -> egui::Response {
    ui.label(text).on_hover_text(tip)
}

fn heading_with_tip(ui: &mut egui::Ui, text: &str, tip: &str) -> egui::Response {
    ui.heading(text).on_hover_text(tip)
}

/// 공통: 바이너리 폰트 바이트를 egui에 등록.
fn apply_font_bytes(ctx: &egui::Context, bytes: Vec<u8>, name: &str) {
    let mut fonts = egui::FontDefinitions::default();
    let font_name = name.to_string();
    fonts
        .font_data
        .insert(font_name.clone(), egui::FontData::from_owned(bytes));
    fonts
        .families
        .entry(egui::FontFamily::Proportional)
        .or_default()
        .insert(0, font_name.clone());
    fonts
        .families
        .entry(egui::FontFamily::Monospace)
        .or_default()
        .insert(0, font_name);
    ctx.set_fonts(fonts);
}

/// 한글/키릴 문자를 표시하기 위해 기본 폰트를 우선 적용한다.
/// 1) assets/fonts/ 안의 폰트
/// 2) Windows 시스템 폰트(맑은 고딕/굴림 등)
/// 3) 모두 실패 시 Err를 반환해 사용자 지정 폰트 로드를 유도한다.
fn setup_fonts(ctx: &egui::Context) -> Result<(), String> {
    // 1) 프로젝트 내 폰트
    for name in ["malgun.ttf", "NotoSans.ttf"] {
        let asset_path = Path::new("assets/fonts").join(name);
        if asset_path.exists() {
            let bytes =
                fs::read(&asset_path).map_err(|e| format!("Failed to read font file: {e}"))?;
            apply_font_bytes(ctx, bytes, "app_font");
            return Ok(());
        }
    }

    // 2) 시스템 폰트 탐색 (Windows 기준)
    if let Some(windir) = std::env::var_os("WINDIR") {
        let fonts = Path::new(&windir).join("Fonts");
        let candidates = [
            "malgun.ttf",
            "malgunsl.ttf",
            "malgunbd.ttf",
            "gulim.ttc",
            "batang.ttc",
        ];
        for cand in candidates {
            let p = fonts.join(cand);
            if p.exists() {
                let bytes = fs::read(&p)
                    .map_err(|e| format!("Failed to read system font ({}): {e}", p.display()))?;
                apply_font_bytes(ctx, bytes, "app_font");
                return Ok(());
            }
        }
    }

    // 3) 실패: 기본 폰트 유지, 사용자 지정 안내
    Err("Font not found. Please set a user font (.ttf/.ttc) in settings.".into())
}

/// 사용자가 선택한 경로의 폰트를 egui에 등록한다.
fn load_custom_font(ctx: &egui::Context, path: &str) -> Result<(), String> {
    let p = Path::new(path);
    if !p.exists() {
        return Err(format!("Font file not found: {path}"));
    }
    let bytes = fs::read(p).map_err(|e| format!("Failed to read font file: {e}"))?;
    apply_font_bytes(ctx, bytes, "user_font");
    Ok(())
}

struct GuiApp {
    config: config::Config,
    tr: i18n::Translator,
    lang_input: String,
    lang_save_status: Option<String>,
    tab: Tab,
    window_alpha: f32,
    apply_initial_view_size: bool,
    // 데이터
    data: Dataset,
    dataset_status: Option<String>,
    // 순방향 (Eeq)
    fwd_e1: f64,
    fwd_e2: f64,
    fwd_h: f64,
    fwd_d: f64,
    fwd_result: Option<String>,
    fwd_rejected: Vec<RejectedPair>,
    fwd_show_rejected: bool,
    // 역방향 (E1)
    invm_target: f64,
    invm_e2: f64,
    invm_h: f64,
    invm_d: f64,
    invm_result: Option<String>,
    // 역방향 (h)
    invt_target: f64,
    invt_e1: f64,
    invt_e2: f64,
    invt_d: f64,
    invt_result: Option<String>,
    // 단위 변환
    conv_value: f64,
    conv_from: String,
    conv_to: String,
    conv_kind: QuantityKind,
    conv_result: Option<String>,
    // 설정
    ui_scale: f32,
    always_on_top: bool,
    show_settings_modal: bool,
    show_help_modal: bool,
    custom_font_path: String,
    font_load_error: Option<String>,
}

#[derive(Clone, Copy, PartialEq, Eq)]
enum Tab {
    Forward,
    InverseModulus,
    InverseThickness,
    UnitConv,
    Dataset,
}

fn default_units_for_kind(kind: QuantityKind) -> (&'static str, &'static str) {
    match kind {
        QuantityKind::Modulus => ("MPa", "kgf/cm2"),
        QuantityKind::Length => ("cm", "in"),
    }
}

impl GuiApp {
    fn new(config: config::Config) -> Self {
        let (conv_from, conv_to) = default_units_for_kind(QuantityKind::Modulus);
        let lang_code = i18n::resolve_language("auto", Some(config.language.as_str()));
        let tr = i18n::Translator::new_with_pack(&lang_code, config.language_pack_dir.as_deref());
        let lang_input = config.language.clone();
        let (data, dataset_status) = match config.dataset_path.as_deref() {
            Some(path) => match dataset::load_csv(Path::new(path)) {
                Ok(ds) => (ds, None),
                Err(e) => (dataset::built_in(), Some(format!("{e}"))),
            },
            None => (dataset::built_in(), None),
        };
        Self {
            config: config.clone(),
            tr,
            lang_input,
            lang_save_status: None,
            tab: Tab::Forward,
            window_alpha: config.window_alpha.clamp(0.3, 1.0),
            apply_initial_view_size: true,
            data,
            dataset_status,
            // 원전 노모그램 예제의 기본값: E1=2600, E2=3000, h=20, D=40
            fwd_e1: 2600.0,
            fwd_e2: 3000.0,
            fwd_h: 20.0,
            fwd_d: 40.0,
            fwd_result: None,
            fwd_rejected: Vec::new(),
            fwd_show_rejected: false,
            invm_target: 2700.0,
            invm_e2: 3000.0,
            invm_h: 20.0,
            invm_d: 40.0,
            invm_result: None,
            invt_target: 2700.0,
            invt_e1: 2600.0,
            invt_e2: 3000.0,
            invt_d: 40.0,
            invt_result: None,
            conv_value: 100.0,
            conv_from: conv_from.into(),
            conv_to: conv_to.into(),
            conv_kind: QuantityKind::Modulus,
            conv_result: None,
            ui_scale: 1.0,
            always_on_top: true,
            show_settings_modal: false,
            show_help_modal: false,
            custom_font_path: String::new(),
            font_load_error: None,
        }
    }

    fn engine(&self) -> Engine<'_> {
        Engine::with_tolerance(&self.data.table, self.config.tolerance)
    }

    /// 사이드 메뉴를 제공한다.
    fn ui_nav(&mut self, ui: &mut egui::Ui) {
        let tr = self.tr.clone();
        let txt = |key: &str, default: &str| tr.lookup(key).unwrap_or_else(|| default.to_string());
        ui.style_mut().wrap = Some(false);
        ui.vertical_centered(|ui| {
            ui.heading(txt("gui.app_title", "Pavement Toolbox"));
            ui.add_space(8.0);
        });
        for (tab, label) in [
            (Tab::Forward, txt("gui.tab_forward", "Eeq")),
            (Tab::InverseModulus, txt("gui.tab_inverse_modulus", "E1 (inverse)")),
            (
                Tab::InverseThickness,
                txt("gui.tab_inverse_thickness", "h (inverse)"),
            ),
            (Tab::UnitConv, txt("gui.tab_unit_conv", "Unit Conv")),
            (Tab::Dataset, txt("gui.tab_dataset", "Dataset")),
        ] {
            let selected = self.tab == tab;
            let button = egui::Button::new(label)
                .fill(if selected {
                    ui.visuals().selection.bg_fill
                } else {
                    ui.visuals().extreme_bg_color
                })
                .min_size(egui::vec2(ui.available_width(), 32.0));
            if ui.add(button).clicked() {
                self.tab = tab;
            }
            ui.add_space(4.0);
        }
    }

    fn ui_forward(&mut self, ui: &mut egui::Ui) {
        let tr = self.tr.clone();
        let txt = |key: &str, default: &str| tr.lookup(key).unwrap_or_else(|| default.to_string());
        heading_with_tip(
            ui,
            &txt("gui.tab_forward", "Eeq"),
            &txt(
                "help.forward",
                "Interpolate the isolines at h/D and E1/E2 to get Eeq.",
            ),
        );
        ui.add_space(8.0);
        egui::Frame::group(ui.style()).show(ui, |ui| {
            egui::Grid::new("forward_grid")
                .num_columns(2)
                .spacing([12.0, 8.0])
                .show(ui, |ui| {
                    label_with_tip(ui, &txt("gui.e1", "E1"), "MPa");
                    ui.add(egui::DragValue::new(&mut self.fwd_e1).speed(10.0).suffix(" MPa"));
                    ui.end_row();
                    label_with_tip(ui, &txt("gui.e2", "E2"), "MPa");
                    ui.add(egui::DragValue::new(&mut self.fwd_e2).speed(10.0).suffix(" MPa"));
                    ui.end_row();
                    label_with_tip(ui, &txt("gui.h", "h"), "cm");
                    ui.add(egui::DragValue::new(&mut self.fwd_h).speed(0.5).suffix(" cm"));
                    ui.end_row();
                    label_with_tip(ui, &txt("gui.d", "D"), "cm");
                    ui.add(egui::DragValue::new(&mut self.fwd_d).speed(0.5).suffix(" cm"));
                    ui.end_row();
                });
        });
        ui.add_space(8.0);
        if ui.button(txt("gui.calculate", "Calculate")).clicked() {
            self.fwd_rejected.clear();
            self.fwd_result = match self.engine().forward_verbose(
                self.fwd_e1,
                self.fwd_e2,
                self.fwd_h,
                self.fwd_d,
            ) {
                Ok((Some(sol), _)) => {
                    let unit = self.config.default_units.modulus;
                    let eeq =
                        convert_modulus(sol.equivalent_modulus, ModulusUnit::MegaPascal, unit);
                    Some(format!(
                        "Eeq = {:.1} {}  (Eeq/E2 = {:.4})\n{} ({:.3}, {:.3}), y = [{:.4}, {:.4}]",
                        eeq,
                        unit.label(),
                        sol.level,
                        txt("gui.bracket", "Bracket"),
                        sol.bracket.lower_level,
                        sol.bracket.upper_level,
                        sol.bracket.y_lower,
                        sol.bracket.y_upper
                    ))
                }
                Ok((None, rejected)) => {
                    self.fwd_rejected = rejected;
                    Some(txt("gui.out_of_range", "Out of table range. Add more isolines."))
                }
                Err(e) => Some(format!("{e}")),
            };
        }
        if let Some(result) = &self.fwd_result {
            ui.add_space(8.0);
            ui.label(result);
        }
        if !self.fwd_rejected.is_empty() {
            ui.add_space(8.0);
            ui.checkbox(
                &mut self.fwd_show_rejected,
                txt("gui.show_rejected", "Show rejected-pair diagnostics"),
            );
            if self.fwd_show_rejected {
                egui::Grid::new("rejected_grid")
                    .num_columns(5)
                    .spacing([12.0, 4.0])
                    .striped(true)
                    .show(ui, |ui| {
                        ui.strong(txt("gui.lower_level", "Lower level"));
                        ui.strong(txt("gui.upper_level", "Upper level"));
                        ui.strong(txt("gui.y_lower", "y on lower"));
                        ui.strong(txt("gui.y_upper", "y on upper"));
                        ui.strong(txt("gui.y_query", "query y"));
                        ui.end_row();
                        for r in &self.fwd_rejected {
                            ui.label(format!("{:.3}", r.lower_level));
                            ui.label(format!("{:.3}", r.upper_level));
                            ui.label(format!("{:.4}", r.y_lower));
                            ui.label(format!("{:.4}", r.y_upper));
                            ui.label(format!("{:.4}", r.y_query));
                            ui.end_row();
                        }
                    });
            }
        }
    }

    fn ui_inverse_modulus(&mut self, ui: &mut egui::Ui) {
        let tr = self.tr.clone();
        let txt = |key: &str, default: &str| tr.lookup(key).unwrap_or_else(|| default.to_string());
        heading_with_tip(
            ui,
            &txt("gui.tab_inverse_modulus", "E1 (inverse)"),
            &txt(
                "help.inverse_modulus",
                "Solve for the required top-layer modulus E1.",
            ),
        );
        ui.add_space(8.0);
        egui::Frame::group(ui.style()).show(ui, |ui| {
            egui::Grid::new("invm_grid")
                .num_columns(2)
                .spacing([12.0, 8.0])
                .show(ui, |ui| {
                    label_with_tip(ui, &txt("gui.target_eeq", "Target Eeq"), "MPa");
                    ui.add(egui::DragValue::new(&mut self.invm_target).speed(10.0).suffix(" MPa"));
                    ui.end_row();
                    label_with_tip(ui, &txt("gui.e2", "E2"), "MPa");
                    ui.add(egui::DragValue::new(&mut self.invm_e2).speed(10.0).suffix(" MPa"));
                    ui.end_row();
                    label_with_tip(ui, &txt("gui.h", "h"), "cm");
                    ui.add(egui::DragValue::new(&mut self.invm_h).speed(0.5).suffix(" cm"));
                    ui.end_row();
                    label_with_tip(ui, &txt("gui.d", "D"), "cm");
                    ui.add(egui::DragValue::new(&mut self.invm_d).speed(0.5).suffix(" cm"));
                    ui.end_row();
                });
        });
        ui.add_space(8.0);
        if ui.button(txt("gui.calculate", "Calculate")).clicked() {
            let level = if self.invm_e2 != 0.0 {
                self.invm_target / self.invm_e2
            } else {
                0.0
            };
            self.invm_result = match self.engine().solve_upper_modulus(
                level,
                self.invm_h,
                self.invm_d,
                self.invm_e2,
            ) {
                Ok(Some(sol)) => {
                    let unit = self.config.default_units.modulus;
                    let e1 = convert_modulus(sol.upper_modulus, ModulusUnit::MegaPascal, unit);
                    Some(format!(
                        "E1 = {:.1} {}  (E1/E2 = {:.4})\n{} ({:.3}, {:.3})",
                        e1,
                        unit.label(),
                        sol.y,
                        txt("gui.bracket", "Bracket"),
                        sol.bracket.lower_level,
                        sol.bracket.upper_level
                    ))
                }
                Ok(None) => Some(txt("gui.out_of_range", "Out of table range. Add more isolines.")),
                Err(e) => Some(format!("{e}")),
            };
        }
        if let Some(result) = &self.invm_result {
            ui.add_space(8.0);
            ui.label(result);
        }
    }

    fn ui_inverse_thickness(&mut self, ui: &mut egui::Ui) {
        let tr = self.tr.clone();
        let txt = |key: &str, default: &str| tr.lookup(key).unwrap_or_else(|| default.to_string());
        heading_with_tip(
            ui,
            &txt("gui.tab_inverse_thickness", "h (inverse)"),
            &txt(
                "help.inverse_thickness",
                "Solve for the required layer thickness h.",
            ),
        );
        ui.add_space(8.0);
        egui::Frame::group(ui.style()).show(ui, |ui| {
            egui::Grid::new("invt_grid")
                .num_columns(2)
                .spacing([12.0, 8.0])
                .show(ui, |ui| {
                    label_with_tip(ui, &txt("gui.target_eeq", "Target Eeq"), "MPa");
                    ui.add(egui::DragValue::new(&mut self.invt_target).speed(10.0).suffix(" MPa"));
                    ui.end_row();
                    label_with_tip(ui, &txt("gui.e1", "E1"), "MPa");
                    ui.add(egui::DragValue::new(&mut self.invt_e1).speed(10.0).suffix(" MPa"));
                    ui.end_row();
                    label_with_tip(ui, &txt("gui.e2", "E2"), "MPa");
                    ui.add(egui::DragValue::new(&mut self.invt_e2).speed(10.0).suffix(" MPa"));
                    ui.end_row();
                    label_with_tip(ui, &txt("gui.d", "D"), "cm");
                    ui.add(egui::DragValue::new(&mut self.invt_d).speed(0.5).suffix(" cm"));
                    ui.end_row();
                });
        });
        ui.add_space(8.0);
        if ui.button(txt("gui.calculate", "Calculate")).clicked() {
            let level = if self.invt_e2 != 0.0 {
                self.invt_target / self.invt_e2
            } else {
                0.0
            };
            self.invt_result = match self.engine().solve_thickness(
                level,
                self.invt_e1,
                self.invt_e2,
                self.invt_d,
            ) {
                Ok(Some(sol)) => {
                    let unit = self.config.default_units.length;
                    let h = convert_length(sol.thickness, LengthUnit::Centimeter, unit);
                    Some(format!(
                        "h = {:.2} {}  (h/D = {:.4})\n{} ({:.3}, {:.3})",
                        h,
                        unit.label(),
                        sol.x,
                        txt("gui.bracket", "Bracket"),
                        sol.bracket.lower_level,
                        sol.bracket.upper_level
                    ))
                }
                Ok(None) => Some(txt("gui.out_of_range", "Out of table range. Add more isolines.")),
                Err(e) => Some(format!("{e}")),
            };
        }
        if let Some(result) = &self.invt_result {
            ui.add_space(8.0);
            ui.label(result);
        }
    }

    fn ui_unit_conv(&mut self, ui: &mut egui::Ui) {
        let tr = self.tr.clone();
        let txt = |key: &str, default: &str| tr.lookup(key).unwrap_or_else(|| default.to_string());
        heading_with_tip(
            ui,
            &txt("gui.tab_unit_conv", "Unit Converter"),
            &txt("unit_conversion.heading", "Unit conversion"),
        );
        ui.add_space(8.0);
        egui::Frame::group(ui.style()).show(ui, |ui| {
            egui::Grid::new("conv_grid")
                .num_columns(2)
                .spacing([12.0, 8.0])
                .show(ui, |ui| {
                    let before = self.conv_kind;
                    let q_options = [
                        (QuantityKind::Modulus, txt("gui.modulus", "Modulus")),
                        (QuantityKind::Length, txt("gui.length", "Length")),
                    ];
                    let selected_label = q_options
                        .iter()
                        .find(|(k, _)| *k == self.conv_kind)
                        .map(|(_, l)| l.clone())
                        .unwrap_or_default();
                    egui::ComboBox::from_id_source("conv_kind")
                        .selected_text(selected_label)
                        .show_ui(ui, |ui| {
                            for (k, label) in &q_options {
                                ui.selectable_value(&mut self.conv_kind, *k, label.clone());
                            }
                        });
                    if before != self.conv_kind {
                        let (f, t) = default_units_for_kind(self.conv_kind);
                        self.conv_from = f.to_string();
                        self.conv_to = t.to_string();
                    }
                    ui.end_row();

                    ui.label(txt("gui.value", "Value"));
                    ui.add(egui::DragValue::new(&mut self.conv_value).speed(1.0));
                    ui.end_row();

                    ui.label(txt("gui.from_unit", "From"));
                    ui.text_edit_singleline(&mut self.conv_from);
                    ui.end_row();

                    ui.label(txt("gui.to_unit", "To"));
                    ui.text_edit_singleline(&mut self.conv_to);
                    ui.end_row();
                });
        });
        ui.add_space(8.0);
        if ui.button(txt("gui.convert", "Convert")).clicked() {
            self.conv_result = Some(
                match conversion::convert(
                    self.conv_kind,
                    self.conv_value,
                    self.conv_from.trim(),
                    self.conv_to.trim(),
                ) {
                    Ok(v) => format!("{v:.4} {}", self.conv_to.trim()),
                    Err(e) => format!("{e}"),
                },
            );
        }
        if let Some(result) = &self.conv_result {
            ui.add_space(8.0);
            ui.label(result);
        }
    }

    fn ui_dataset(&mut self, ui: &mut egui::Ui) {
        let tr = self.tr.clone();
        let txt = |key: &str, default: &str| tr.lookup(key).unwrap_or_else(|| default.to_string());
        heading_with_tip(
            ui,
            &txt("gui.tab_dataset", "Dataset"),
            &txt("help.dataset", "Isoline data in use."),
        );
        ui.add_space(8.0);
        ui.label(format!("{} {}", txt("gui.dataset_name", "Name"), self.data.name));
        ui.label(format!(
            "{} {} / {} / {}",
            txt("dataset.columns", "Columns:"),
            self.data.labels.level,
            self.data.labels.x,
            self.data.labels.y
        ));
        ui.add_space(8.0);
        egui::Grid::new("dataset_grid")
            .num_columns(4)
            .spacing([16.0, 4.0])
            .striped(true)
            .show(ui, |ui| {
                ui.strong(txt("gui.dataset_levels", "Level"));
                ui.strong("x min");
                ui.strong("x max");
                ui.strong(txt("gui.dataset_points", "Samples"));
                ui.end_row();
                for curve in self.data.table.isolines() {
                    ui.label(format!("{:.3}", curve.level()));
                    ui.label(format!("{:.3}", curve.x_min()));
                    ui.label(format!("{:.3}", curve.x_max()));
                    ui.label(format!("{}", curve.points().len()));
                    ui.end_row();
                }
            });
        ui.add_space(8.0);
        ui.horizontal(|ui| {
            if ui.button(txt("gui.load_csv", "Load CSV...")).clicked() {
                if let Some(path) = FileDialog::new().add_filter("CSV", &["csv"]).pick_file() {
                    match dataset::load_csv(&path) {
                        Ok(ds) => {
                            self.dataset_status =
                                Some(format!("{} {}", txt("dataset.loaded", "Loaded:"), ds.name));
                            self.data = ds;
                            self.config.dataset_path =
                                Some(path.to_string_lossy().into_owned());
                            let _ = self.config.save();
                        }
                        Err(e) => self.dataset_status = Some(format!("{e}")),
                    }
                }
            }
            if ui
                .button(txt("gui.built_in_dataset", "Built-in nomogram"))
                .clicked()
            {
                self.data = dataset::built_in();
                self.config.dataset_path = None;
                let _ = self.config.save();
                self.dataset_status = None;
            }
        });
        if let Some(status) = &self.dataset_status {
            ui.add_space(4.0);
            ui.label(status);
        }
    }
}

impl App for GuiApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut Frame) {
        // 최초 1회 화면 크기 조정
        if self.apply_initial_view_size {
            if let Some(screen) = ctx.input(|i| {
                let r = i.screen_rect();
                if r.is_positive() {
                    Some(r.size())
                } else {
                    None
                }
            }) {
                let target = egui::vec2((screen.x * 0.5).max(860.0), (screen.y * 0.6).max(600.0));
                ctx.send_viewport_cmd(egui::ViewportCommand::InnerSize(target));
                self.apply_initial_view_size = false;
            }
        }

        ctx.send_viewport_cmd(egui::ViewportCommand::WindowLevel(if self.always_on_top {
            egui::WindowLevel::AlwaysOnTop
        } else {
            egui::WindowLevel::Normal
        }));

        // 투명도 적용 + 라벨 복사 방지 스타일
        let mut style = (*ctx.style()).clone();
        style.interaction.selectable_labels = false;
        style.visuals.window_fill = style.visuals.window_fill.linear_multiply(self.window_alpha);
        style.visuals.panel_fill = style.visuals.panel_fill.linear_multiply(self.window_alpha);
        ctx.set_style(style);

        let tr = self.tr.clone();
        let txt =
            move |key: &str, default: &str| tr.lookup(key).unwrap_or_else(|| default.to_string());

        // 상단 바
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.heading(txt("gui.app_title", "Pavement Engineering Toolbox"));
                ui.separator();
                if ui.button(txt("gui.settings", "Settings")).clicked() {
                    self.show_settings_modal = true;
                }
                if ui.button(txt("gui.help", "Help")).clicked() {
                    self.show_help_modal = true;
                }
            });
        });

        // 설정 모달
        if self.show_settings_modal {
            egui::Window::new(txt("gui.settings", "Settings"))
                .collapsible(false)
                .resizable(true)
                .open(&mut self.show_settings_modal)
                .show(ctx, |ui| {
                    ui.label(txt("gui.ui_scale", "UI scale"));
                    let scale_slider = egui::Slider::new(&mut self.ui_scale, 0.8..=1.6).suffix(" x");
                    if ui.add(scale_slider).changed() {
                        ctx.set_pixels_per_point(self.ui_scale);
                    }
                    ui.separator();
                    ui.checkbox(
                        &mut self.always_on_top,
                        txt("gui.always_on_top", "Always on top"),
                    );
                    ui.separator();
                    ui.label(txt("gui.window_alpha", "Window opacity"));
                    ui.add(egui::Slider::new(&mut self.window_alpha, 0.3..=1.0).text("alpha"));

                    ui.separator();
                    ui.label(txt("gui.custom_font", "Custom font"));
                    ui.small(txt(
                        "gui.font_hint",
                        "Pick a .ttf/.otf file to render Korean or Cyrillic text.",
                    ));
                    ui.horizontal(|ui| {
                        ui.text_edit_singleline(&mut self.custom_font_path);
                        if ui.button("...").clicked() {
                            if let Some(path) = FileDialog::new()
                                .add_filter("Font", &["ttf", "otf", "ttc"])
                                .pick_file()
                            {
                                self.custom_font_path = path.to_string_lossy().into_owned();
                            }
                        }
                    });
                    if !self.custom_font_path.is_empty()
                        && ui.button(txt("gui.calculate", "Apply")).clicked()
                    {
                        self.font_load_error =
                            load_custom_font(ctx, &self.custom_font_path).err();
                    }
                    if let Some(err) = &self.font_load_error {
                        ui.colored_label(egui::Color32::RED, err);
                    }

                    ui.separator();
                    ui.label(txt("gui.language", "Language"));
                    egui::ComboBox::from_id_source("lang_choice")
                        .selected_text(&self.lang_input)
                        .show_ui(ui, |ui| {
                            ui.selectable_value(
                                &mut self.lang_input,
                                "auto".into(),
                                txt("gui.language_auto", "Auto (system)"),
                            );
                            ui.selectable_value(&mut self.lang_input, "en-us".into(), "English (US)");
                            ui.selectable_value(&mut self.lang_input, "ko-kr".into(), "한국어");
                            ui.selectable_value(&mut self.lang_input, "bg-bg".into(), "Български");
                        });
                    if ui.button(txt("settings.saved", "Save")).clicked() {
                        self.config.language = self.lang_input.clone();
                        self.config.window_alpha = self.window_alpha;
                        // 즉시 번역기 반영
                        let resolved = i18n::resolve_language(
                            &self.config.language,
                            Some(self.config.language.as_str()),
                        );
                        self.tr = i18n::Translator::new_with_pack(
                            &resolved,
                            self.config.language_pack_dir.as_deref(),
                        );
                        if let Err(e) = self.config.save() {
                            self.lang_save_status = Some(format!("Save error: {e}"));
                        } else {
                            self.lang_save_status =
                                Some(txt("gui.restart_hint", "Applies after restart."));
                        }
                    }
                    if let Some(msg) = &self.lang_save_status {
                        ui.label(msg);
                    }
                });
        }

        // 도움말 모달
        if self.show_help_modal {
            egui::Window::new(txt("gui.about", "About"))
                .collapsible(false)
                .resizable(true)
                .open(&mut self.show_help_modal)
                .show(ctx, |ui| {
                    ui.heading(txt("gui.app_title", "Pavement Engineering Toolbox"));
                    ui.label(format!("Version: {}", env!("CARGO_PKG_VERSION")));
                    ui.separator();
                    ui.label(txt(
                        "help.forward",
                        "Interpolate the isolines at h/D and E1/E2 to get Eeq.",
                    ));
                    ui.label(txt(
                        "help.inverse_modulus",
                        "Solve for the required top-layer modulus E1.",
                    ));
                    ui.label(txt(
                        "help.inverse_thickness",
                        "Solve for the required layer thickness h.",
                    ));
                    ui.label(txt(
                        "help.dataset",
                        "CSV headers: Eeq_over_E2 / h_over_D / E1_over_E2.",
                    ));
                });
        }

        // 좌측 네비 + 본문
        egui::SidePanel::left("nav")
            .resizable(true)
            .min_width(140.0)
            .default_width(200.0)
            .max_width(400.0)
            .show(ctx, |ui| {
                self.ui_nav(ui);
            });

        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical()
                .auto_shrink([false; 2])
                .show(ui, |ui| match self.tab {
                    Tab::Forward => self.ui_forward(ui),
                    Tab::InverseModulus => self.ui_inverse_modulus(ui),
                    Tab::InverseThickness => self.ui_inverse_thickness(ui),
                    Tab::UnitConv => self.ui_unit_conv(ui),
                    Tab::Dataset => self.ui_dataset(ui),
                });
        });
    }
}
