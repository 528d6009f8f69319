use leptos::*;

use crate::domain::{
    conversion::{BASE_ASSET, ConverterState, Direction, QUOTE_ASSET, Symbol},
    logging::{LogComponent, LogEntry, Logger},
};
use crate::global_state::{log_lines, logs_paused, stream_live};
use crate::infrastructure::{
    services::ConsoleLogger,
    websocket::{DEPTH_SYMBOL, DepthStreamHandle, spawn_depth_stream},
};
use crate::log_debug;

/// Bridge logger: every entry goes to the browser console and is mirrored
/// into the on-page diagnostics console.
pub struct UiLogger {
    console: ConsoleLogger,
}

impl UiLogger {
    pub fn new_development() -> Self {
        Self { console: ConsoleLogger::new_development() }
    }
}

impl Logger for UiLogger {
    fn log(&self, entry: LogEntry) {
        let formatted = ConsoleLogger::format_entry(&entry);
        self.console.log(entry);

        if !logs_paused().get_untracked() {
            log_lines().update(|lines| {
                lines.push(formatted);
                // Keep the on-page buffer bounded
                while lines.len() > 100 {
                    lines.remove(0);
                }
            });
        }
    }
}

/// 🦀 Root component
#[component]
pub fn App() -> impl IntoView {
    view! {
        <style>
            {r#"
            .converter-app {
                font-family: 'SF Pro Display', -apple-system, BlinkMacSystemFont, sans-serif;
                background: linear-gradient(135deg, #1e3c72 0%, #2a5298 100%);
                min-height: 100vh;
                padding: 20px;
                color: white;
            }

            .header {
                text-align: center;
                margin-bottom: 20px;
                background: rgba(255, 255, 255, 0.1);
                padding: 20px;
                border-radius: 15px;
                border: 1px solid rgba(255, 255, 255, 0.2);
            }

            .stream-status {
                margin-top: 10px;
                font-size: 14px;
                color: #72c685;
            }

            .converter {
                max-width: 420px;
                margin: 0 auto 20px auto;
                background: rgba(255, 255, 255, 0.1);
                padding: 25px;
                border-radius: 15px;
                border: 1px solid rgba(255, 255, 255, 0.2);
            }

            .converter label {
                display: block;
                margin-bottom: 8px;
            }

            .converter input[type="number"] {
                width: 100%;
                padding: 8px;
                margin-bottom: 15px;
                border-radius: 5px;
                border: 1px solid #4a5d73;
                background: #2c3e50;
                color: white;
                font-family: 'Courier New', monospace;
            }

            .switch {
                position: relative;
                display: inline-block;
                width: 60px;
                height: 34px;
            }

            .switch input {
                opacity: 0;
                width: 0;
                height: 0;
            }

            .slider {
                position: absolute;
                cursor: pointer;
                top: 0;
                left: 0;
                right: 0;
                bottom: 0;
                background-color: #4a5d73;
                transition: .4s;
            }

            .slider:before {
                position: absolute;
                content: "";
                height: 26px;
                width: 26px;
                left: 4px;
                bottom: 4px;
                background-color: white;
                transition: .4s;
            }

            input:checked + .slider {
                background-color: #72c685;
            }

            input:checked + .slider:before {
                transform: translateX(26px);
            }

            .slider.round {
                border-radius: 34px;
            }

            .slider.round:before {
                border-radius: 50%;
            }

            .direction-label {
                margin: 10px 0;
                font-weight: bold;
            }

            .result {
                margin-top: 15px;
                font-size: 18px;
                font-family: 'Courier New', monospace;
                color: #72c685;
            }

            .debug-console {
                max-width: 720px;
                margin: 0 auto;
                background: rgba(0, 0, 0, 0.8);
                border-radius: 10px;
                padding: 15px;
                max-height: 300px;
                overflow-y: auto;
                border: 1px solid #4a5d73;
            }

            .debug-header {
                display: flex;
                justify-content: space-between;
                align-items: center;
                margin-bottom: 10px;
                color: #72c685;
                font-weight: bold;
            }

            .debug-btn {
                background: #4a5d73;
                color: white;
                border: none;
                padding: 5px 10px;
                border-radius: 5px;
                cursor: pointer;
                font-size: 12px;
                margin-left: 5px;
            }

            .debug-log {
                font-family: 'Courier New', monospace;
                font-size: 11px;
                line-height: 1.3;
            }

            .log-line {
                color: #e0e0e0;
                margin: 2px 0;
                padding: 1px 5px;
            }
            "#}
        </style>
        <div class="converter-app">
            <Header />
            <Converter />
            <DebugConsole />
        </div>
    }
}

/// Pair name and live-stream status readout
#[component]
fn Header() -> impl IntoView {
    let live = stream_live();

    view! {
        <div class="header">
            <h2>"USDT/ETH Converter"</h2>
            <p>{format!("{BASE_ASSET}/{QUOTE_ASSET} • Binance depth stream")}</p>
            <div class="stream-status">
                {move || if live.get() { "🟢 LIVE" } else { "🔴 OFF" }}
            </div>
        </div>
    }
}

/// Two-state switch. Holds no state of its own; reports the flipped value.
#[component]
pub fn ToggleSwitch(
    #[prop(into)] value: Signal<u8>,
    #[prop(into)] on_change: Callback<u8>,
) -> impl IntoView {
    view! {
        <label class="switch">
            <input
                type="checkbox"
                prop:checked=move || value.get() == 1
                on:change=move |_| on_change.call(1 - value.get())
            />
            <span class="slider round"></span>
        </label>
    }
}

/// The converter widget: owns the converter state and the feed subscription.
#[component]
fn Converter() -> impl IntoView {
    let state = create_rw_signal(ConverterState::new());

    // One subscription per mount, released exactly once on teardown.
    let handle = start_depth_stream(state);
    on_cleanup(move || handle.close());

    let toggle_value = Signal::derive(move || state.with(|s| s.direction().as_toggle()));
    let on_toggle = Callback::new(move |value: u8| {
        let direction = Direction::from_toggle(value);
        state.update(|s| s.set_direction(direction));
        log_debug!(LogComponent::Presentation("Converter"), "Direction set to {direction}");
    });

    let on_amount_input = move |ev| {
        // Unvalidated by design: a non-numeric field becomes the NaN sentinel
        let amount = event_target_value(&ev).parse::<f64>().unwrap_or(f64::NAN);
        state.update(|s| s.set_amount(amount));
    };

    view! {
        <div class="converter">
            <label for="amount-eth">"Enter ETH Amount:"</label>
            <input type="number" id="amount-eth" step="any" value="0" on:input=on_amount_input />
            <ToggleSwitch value=toggle_value on_change=on_toggle />
            <div class="direction-label">{move || state.with(|s| s.direction().label())}</div>
            {move || {
                state.with(|s| s.result()).map(|result| {
                    view! {
                        <div class="result">
                            {format!("Amount of {QUOTE_ASSET} required: {result}")}
                        </div>
                    }
                })
            }}
        </div>
    }
}

/// On-page view of the diagnostic channel
#[component]
fn DebugConsole() -> impl IntoView {
    let logs = log_lines();
    let paused = logs_paused();

    view! {
        <div class="debug-console">
            <div class="debug-header">
                <span>"🐛 Feed diagnostics"</span>
                <div>
                    <button class="debug-btn" on:click=move |_| paused.update(|p| *p = !*p)>
                        {move || if paused.get() { "▶️ Resume" } else { "⏸️ Pause" }}
                    </button>
                    <button class="debug-btn" on:click=move |_| logs.set(Vec::new())>
                        "🗑️ Clear"
                    </button>
                </div>
            </div>
            <div class="debug-log">
                <For
                    each=move || logs.get()
                    key=|line| line.clone()
                    children=move |line| {
                        view! { <div class="log-line">{line}</div> }
                    }
                />
            </div>
        </div>
    }
}

/// Open the depth subscription and feed best-bid quotes into the state.
fn start_depth_stream(state: RwSignal<ConverterState>) -> DepthStreamHandle {
    let handler = move |quote| {
        stream_live().set(true);
        state.update(|s| s.apply_quote(quote));
    };
    let on_disconnect = move || stream_live().set(false);

    spawn_depth_stream(Symbol::from(DEPTH_SYMBOL), handler, on_disconnect)
}
