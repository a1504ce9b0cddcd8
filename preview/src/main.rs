//! Desktop preview app for myrtio-led-bank
//!
//! Shows a bank of virtual LEDs in a window with per-LED mode controls.
//! The window is bound to the bank exactly like hardware would be: through
//! a status sink feeding a `StatusChannel`.

use std::time::Instant as StdInstant;

use eframe::egui::{self};
use myrtio_led_bank::{
    Duration, Instant, LedBankConfig, LedController, LedMode, StatusChannel, StatusSender,
    TickOptions,
};

/// Number of LEDs in the simulated bank
const LED_COUNT: usize = 16;

/// Status channel size
const STATUS_CHANNEL_SIZE: usize = 8;

/// Diameter of each LED in pixels
const LED_SIZE: f32 = 28.0;

/// Gap between LEDs
const LED_GAP: f32 = 10.0;

const LED_ON_COLOR: egui::Color32 = egui::Color32::from_rgb(255, 170, 40);
const LED_OFF_COLOR: egui::Color32 = egui::Color32::from_rgb(50, 40, 30);

/// Static status channel between the controller and the UI
static STATUS_CHANNEL: StatusChannel<u32, STATUS_CHANNEL_SIZE> = StatusChannel::new();

type PreviewController = LedController<StatusSender<'static, u32, STATUS_CHANNEL_SIZE>, LED_COUNT>;

fn main() -> eframe::Result<()> {
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([760.0, 420.0])
            .with_title("LED Bank Preview"),
        ..Default::default()
    };

    eframe::run_native(
        "myrtio-led-bank-preview",
        options,
        Box::new(|_cc| Ok(Box::new(PreviewApp::new()))),
    )
}

struct PreviewApp {
    /// The controller instance
    controller: PreviewController,

    /// Last status word received from the sink
    status: u32,
    /// Number of status words received
    published: u64,
    /// Phase interval in milliseconds
    interval_ms: u64,
    /// Synthetic time in milliseconds
    t_ms: u64,
    /// Wall-clock reference for delta time
    last_frame: StdInstant,
    /// Whether the clock is running
    playing: bool,
    /// Mode to assign with the "all" button
    bulk_mode: LedMode,
}

impl PreviewApp {
    fn new() -> Self {
        let interval = LedBankConfig::default().interval;
        let controller = PreviewController::new(
            LedBankConfig::new(interval),
            STATUS_CHANNEL.sender(),
        );

        Self {
            controller,
            status: 0,
            published: 0,
            interval_ms: interval.as_millis(),
            t_ms: 0,
            last_frame: StdInstant::now(),
            playing: true,
            bulk_mode: LedMode::Flash,
        }
    }

    /// Reset time to zero
    fn reset_time(&mut self) {
        self.t_ms = 0;
        self.last_frame = StdInstant::now();
        self.controller = PreviewController::with_sink(
            LedBankConfig::new(Duration::from_millis(self.interval_ms)),
            Some(STATUS_CHANNEL.sender()),
        );
        self.status = 0;
    }

    /// Update synthetic time based on wall clock
    fn update_time(&mut self) {
        let now = StdInstant::now();
        let delta = now.duration_since(self.last_frame);
        self.last_frame = now;

        if self.playing {
            #[allow(clippy::cast_possible_truncation)]
            let delta_ms = delta.as_millis() as u64;
            self.t_ms = self.t_ms.wrapping_add(delta_ms);
        }
    }

    /// Pull every status word published since the last frame
    fn drain_statuses(&mut self) {
        let receiver = STATUS_CHANNEL.receiver();
        while let Ok(status) = receiver.try_receive() {
            self.status = status;
            self.published += 1;
        }
    }

    fn mode_selector(ui: &mut egui::Ui, id: usize, mode: &mut LedMode) {
        egui::ComboBox::from_id_salt(("led_mode", id))
            .width(70.0)
            .selected_text(mode.as_str())
            .show_ui(ui, |ui| {
                for option in LedMode::ASSIGNABLE {
                    ui.selectable_value(mode, option, option.as_str());
                }
            });
    }
}

impl eframe::App for PreviewApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.update_time();

        if self.playing {
            self.controller.tick(Instant::from_millis(self.t_ms));
        }
        self.drain_statuses();

        ctx.request_repaint();

        egui::CentralPanel::default().show(ctx, |ui| {
            // <PlaybackControls>
            ui.horizontal(|ui| {
                if ui.button("⏮ Reset").clicked() {
                    self.reset_time();
                }
                if ui
                    .button(if self.playing { "⏸ Pause" } else { "▶ Play" })
                    .clicked()
                {
                    self.playing = !self.playing;
                }
                if ui.button("⏭ Step").clicked() {
                    self.controller.tick_with(
                        Instant::from_millis(self.t_ms),
                        TickOptions::DEFAULT.forced(),
                    );
                }

                ui.add_space(8.0);

                let secs = self.t_ms / 1000;
                let ms = self.t_ms % 1000;
                ui.label(format!("Time: {secs}.{ms:03}s"));
            });
            // </PlaybackControls>

            ui.add_space(4.0);

            ui.horizontal(|ui| {
                ui.label("Interval (ms):");
                let old_interval = self.interval_ms;
                ui.add(egui::Slider::new(&mut self.interval_ms, 0..=1000));
                if self.interval_ms != old_interval {
                    self.controller
                        .set_interval(Duration::from_millis(self.interval_ms));
                }
            });

            ui.add_space(4.0);

            ui.horizontal(|ui| {
                ui.label("All LEDs:");
                Self::mode_selector(ui, LED_COUNT, &mut self.bulk_mode);
                if ui.button("Apply").clicked() {
                    let _ = self.controller.set_all(self.bulk_mode);
                }
            });

            ui.add_space(16.0);

            // === LED Display ===
            let pitch = LED_SIZE + LED_GAP;
            #[allow(clippy::cast_precision_loss)]
            let width = LED_COUNT as f32 * pitch;
            let (response, painter) =
                ui.allocate_painter(egui::vec2(width, pitch), egui::Sense::hover());
            let origin = response.rect.min;

            #[allow(clippy::cast_precision_loss)]
            for index in 0..LED_COUNT {
                let center = egui::pos2(
                    origin.x + index as f32 * pitch + LED_SIZE / 2.0,
                    origin.y + LED_SIZE / 2.0,
                );
                let color = if (self.status >> index) & 0x01 == 0x01 {
                    LED_ON_COLOR
                } else {
                    LED_OFF_COLOR
                };
                painter.circle_filled(center, LED_SIZE / 2.0, color);
            }

            ui.add_space(8.0);

            // === Mode controls ===
            egui::Grid::new("led_modes").show(ui, |ui| {
                for index in 0..LED_COUNT {
                    let Ok(current) = self.controller.led(index) else {
                        continue;
                    };
                    // Internal off phases show the flashes still ahead
                    let mut selected = if current.is_assignable() {
                        current
                    } else {
                        current.next()
                    };
                    let shown = selected;

                    ui.label(format!("#{index}"));
                    Self::mode_selector(ui, index, &mut selected);
                    if selected != shown {
                        let _ = self.controller.set_led(index, selected);
                    }

                    if index % 4 == 3 {
                        ui.end_row();
                    }
                }
            });

            ui.add_space(8.0);
            ui.label(format!(
                "Status: {:#06x}  ({} words published)",
                self.status, self.published
            ));
        });
    }
}
