//! Desktop preview app for myrtio-led-engine animations
//!
//! A background thread runs the engine in [`SchedulerMode::Background`] and
//! polls it on its own cadence. The UI publishes [`AnimationState`] values and
//! draws the presentation buffer, like a real controller and web preview would.

use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::thread;

use eframe::egui::{self};
use myrtio_led_engine::gamma::apply_output_levels;
use myrtio_led_engine::{
    AnimationMode, AnimationState, ChannelLayout, ColorRgbw, Direction, EngineConfig,
    EngineShared, Instant, LedEngine, MirrorMode, OutputDriver, SchedulerMode,
};

/// Maximum number of LEDs the engine supports
const MAX_LEDS: usize = 180;

/// Default number of LEDs in the simulated strip
const DEFAULT_LED_COUNT: usize = 60;

/// Size of each LED rectangle in pixels
const LED_SIZE: f32 = 12.0;

/// Gap between LEDs
const LED_GAP: f32 = 2.0;

/// State mailbox and presented frame, shared by the UI and the render thread
static SHARED: EngineShared<MAX_LEDS> = EngineShared::new();

/// Driver that keeps the last frame as the hardware would see it
#[derive(Default)]
struct PreviewDriver {
    output: Arc<Mutex<Vec<ColorRgbw>>>,
}

impl OutputDriver for PreviewDriver {
    type Error = core::convert::Infallible;

    fn init(&mut self, pixel_count: usize, _layout: ChannelLayout) -> Result<(), Self::Error> {
        if let Ok(mut output) = self.output.lock() {
            output.clear();
            output.resize(pixel_count, ColorRgbw::BLACK);
        }
        Ok(())
    }

    fn write(&mut self, colors: &[ColorRgbw], brightness_limit: u8) -> Result<(), Self::Error> {
        if let Ok(mut output) = self.output.lock() {
            apply_output_levels(colors, brightness_limit, &mut output);
        }
        Ok(())
    }
}

/// Render thread: restarts the engine whenever the LED count changes
fn spawn_renderer(
    led_count: Arc<AtomicUsize>,
    output: Arc<Mutex<Vec<ColorRgbw>>>,
    running: Arc<AtomicBool>,
) {
    thread::spawn(move || {
        while running.load(Ordering::Relaxed) {
            let count = led_count.load(Ordering::Relaxed);
            let config = EngineConfig::new(count).with_scheduler(SchedulerMode::Background);
            let driver = PreviewDriver {
                output: output.clone(),
            };
            let mut engine = LedEngine::new(&SHARED, driver, config);
            if let Err(error) = engine.begin() {
                eprintln!("engine failed to start: {error}");
                return;
            }

            while running.load(Ordering::Relaxed) && led_count.load(Ordering::Relaxed) == count {
                let result = engine.poll(Instant::now());
                thread::sleep(std::time::Duration::from_millis(
                    result.sleep_duration.as_millis(),
                ));
            }
        }
    });
}

fn main() -> eframe::Result<()> {
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([900.0, 600.0])
            .with_title("LED Engine Preview"),
        ..Default::default()
    };

    eframe::run_native(
        "myrtio-led-preview",
        options,
        Box::new(|_cc| Ok(Box::new(PreviewApp::new()))),
    )
}

struct PreviewApp {
    /// State edited by the controls, published on every change
    state: AnimationState,
    /// Color A as RGB + white
    color_a: [u8; 3],
    white_a: u8,
    /// Color B as RGB + white
    color_b: [u8; 3],
    white_b: u8,

    led_count: Arc<AtomicUsize>,
    output: Arc<Mutex<Vec<ColorRgbw>>>,
    running: Arc<AtomicBool>,

    /// Show the gamma-corrected driver output instead of the preview pixels
    show_output: bool,
    /// LED pixel size for display
    led_size: f32,
}

impl PreviewApp {
    fn new() -> Self {
        let color_a = ColorRgbw::new(255, 180, 100, 0);
        let color_b = ColorRgbw::new(0, 40, 255, 0);
        let mut state = AnimationState::new()
            .with_brightness(255)
            .with_mode(AnimationMode::Rainbow)
            .with_colors(color_a, color_b);
        state.animation_speed = 64;
        state.animation_ctrl = 128;

        let app = Self {
            state,
            color_a: [color_a.r, color_a.g, color_a.b],
            white_a: color_a.w,
            color_b: [color_b.r, color_b.g, color_b.b],
            white_b: color_b.w,
            led_count: Arc::new(AtomicUsize::new(DEFAULT_LED_COUNT)),
            output: Arc::default(),
            running: Arc::new(AtomicBool::new(true)),
            show_output: false,
            led_size: LED_SIZE,
        };
        spawn_renderer(app.led_count.clone(), app.output.clone(), app.running.clone());
        app.publish();
        app
    }

    fn publish(&self) {
        SHARED.publisher().publish(Instant::now(), self.state);
    }

    /// Copy the color pickers into the state
    fn sync_colors(&mut self) {
        let [r, g, b] = self.color_a;
        self.state.color_a = ColorRgbw::new(r, g, b, self.white_a);
        let [r, g, b] = self.color_b;
        self.state.color_b = ColorRgbw::new(r, g, b, self.white_b);
    }

    fn controls(&mut self, ui: &mut egui::Ui) {
        let before = self.state;

        ui.horizontal(|ui| {
            ui.label("Mode:");
            egui::ComboBox::from_id_salt("mode_selector")
                .selected_text(self.state.mode.as_str())
                .show_ui(ui, |ui| {
                    for mode in AnimationMode::ALL {
                        ui.selectable_value(&mut self.state.mode, mode, mode.as_str());
                    }
                });

            ui.label("Direction:");
            egui::ComboBox::from_id_salt("direction_selector")
                .selected_text(self.state.direction.as_str())
                .show_ui(ui, |ui| {
                    for direction in Direction::ALL {
                        ui.selectable_value(&mut self.state.direction, direction, direction.as_str());
                    }
                });

            ui.label("Mirror:");
            egui::ComboBox::from_id_salt("mirror_selector")
                .selected_text(self.state.mirror.as_str())
                .show_ui(ui, |ui| {
                    for mirror in MirrorMode::ALL {
                        ui.selectable_value(&mut self.state.mirror, mirror, mirror.as_str());
                    }
                });
        });

        ui.add_space(4.0);

        ui.horizontal(|ui| {
            ui.label("Brightness:");
            ui.add(egui::Slider::new(&mut self.state.master_brightness, 0..=255));
            ui.label("Speed:");
            ui.add(egui::Slider::new(&mut self.state.animation_speed, 0..=255));
        });

        ui.horizontal(|ui| {
            ui.label("Control:");
            ui.add(egui::Slider::new(&mut self.state.animation_ctrl, 0..=255));
            ui.label("Strobe:");
            ui.add(egui::Slider::new(&mut self.state.strobe_rate, 0..=255));
            let mut blend = self.state.blend_mode != 0;
            ui.checkbox(&mut blend, "Blend");
            self.state.blend_mode = u8::from(blend);
        });

        ui.add_space(4.0);

        ui.horizontal(|ui| {
            ui.label("Color A:");
            ui.color_edit_button_srgb(&mut self.color_a);
            ui.add(egui::Slider::new(&mut self.white_a, 0..=255).text("W"));
            ui.add_space(8.0);
            ui.label("Color B:");
            ui.color_edit_button_srgb(&mut self.color_b);
            ui.add(egui::Slider::new(&mut self.white_b, 0..=255).text("W"));
        });
        self.sync_colors();

        if self.state != before {
            self.publish();
        }

        ui.add_space(4.0);

        ui.horizontal(|ui| {
            ui.label("LEDs:");
            let mut led_count = self.led_count.load(Ordering::Relaxed);
            if ui
                .add(egui::Slider::new(&mut led_count, 1usize..=MAX_LEDS))
                .changed()
            {
                self.led_count.store(led_count, Ordering::Relaxed);
            }
            ui.label("Size:");
            ui.add(egui::Slider::new(&mut self.led_size, 4.0..=32.0));
            ui.checkbox(&mut self.show_output, "Driver output");
            ui.label(format!("FPS: {}", SHARED.fps()));
        });
    }

    /// Pixels to draw, RGB only
    fn pixels(&self) -> Vec<[u8; 3]> {
        if self.show_output {
            return self
                .output
                .lock()
                .map(|output| output.iter().map(|pixel| [pixel.r, pixel.g, pixel.b]).collect())
                .unwrap_or_default();
        }
        SHARED
            .preview_pixels()
            .iter()
            .map(|pixel| [pixel.r, pixel.g, pixel.b])
            .collect()
    }
}

impl eframe::App for PreviewApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        ctx.request_repaint();

        egui::CentralPanel::default().show(ctx, |ui| {
            self.controls(ui);

            ui.add_space(16.0);

            let pixels = self.pixels();
            let available_width = ui.available_width();
            let led_pitch = self.led_size + LED_GAP;

            #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
            let leds_per_row = (available_width / led_pitch).floor().max(1.0) as usize;
            let rows = pixels.len().div_ceil(leds_per_row);
            #[allow(clippy::cast_precision_loss)]
            let height = rows as f32 * led_pitch;

            let (response, painter) =
                ui.allocate_painter(egui::vec2(available_width, height), egui::Sense::hover());
            let origin = response.rect.min;

            #[allow(clippy::cast_precision_loss)]
            for (i, [r, g, b]) in pixels.into_iter().enumerate() {
                let row = i / leds_per_row;
                let col = i % leds_per_row;
                let x = origin.x + col as f32 * led_pitch;
                let y = origin.y + row as f32 * led_pitch;

                let rect = egui::Rect::from_min_size(
                    egui::pos2(x, y),
                    egui::vec2(self.led_size, self.led_size),
                );
                painter.rect_filled(rect, 3.0, egui::Color32::from_rgb(r, g, b));
            }
        });
    }
}

impl Drop for PreviewApp {
    fn drop(&mut self) {
        self.running.store(false, Ordering::Relaxed);
    }
}
