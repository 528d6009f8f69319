use crate::domain::{
    conversion::{InvalidQuote, PriceQuote, Symbol},
    logging::{LogComponent, get_logger},
};
use crate::infrastructure::websocket::dto::DepthUpdate;
use futures::StreamExt;
use futures::future::{AbortHandle, Abortable};
use std::cell::Cell;
use std::fmt;

/// Fixed feed endpoint; one stream per widget mount, nothing configurable.
pub const STREAM_BASE_URL: &str = "wss://stream.binance.com:9443/ws";

/// The one trading pair this widget subscribes to.
pub const DEPTH_SYMBOL: &str = "ETHUSDT";

/// Everything that can go wrong between a websocket frame and a usable quote.
#[derive(Debug, Clone, PartialEq)]
pub enum FeedError {
    /// The websocket could not be opened.
    Connect(String),
    /// The frame was not a depth-update JSON object.
    Deserialize(String),
    /// The payload had no bid levels to read a price from.
    MissingBestBid,
    /// The best-bid field was present but not a numeric string.
    BadPrice(String),
    /// The price parsed but is unusable as a quote.
    Quote(InvalidQuote),
}

impl fmt::Display for FeedError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FeedError::Connect(msg) => write!(f, "failed to open websocket: {msg}"),
            FeedError::Deserialize(msg) => write!(f, "malformed depth payload: {msg}"),
            FeedError::MissingBestBid => write!(f, "depth payload carries no bid levels"),
            FeedError::BadPrice(raw) => write!(f, "best bid is not a numeric string: {raw:?}"),
            FeedError::Quote(err) => write!(f, "{err}"),
        }
    }
}

impl std::error::Error for FeedError {}

/// Binance depth-stream client based on gloo.
pub struct BinanceDepthClient {
    symbol: Symbol,
}

impl BinanceDepthClient {
    pub fn new(symbol: Symbol) -> Self {
        Self { symbol }
    }

    pub fn stream_url(&self) -> String {
        format!("{STREAM_BASE_URL}/{}@depth", self.symbol.value().to_lowercase())
    }

    /// Open the websocket for this client's stream.
    pub fn connect(&self) -> Result<gloo_net::websocket::futures::WebSocket, FeedError> {
        let url = self.stream_url();

        get_logger().info(
            LogComponent::Infrastructure("BinanceDepth"),
            &format!("🔌 Connecting to Binance: {url}"),
        );

        let ws = gloo_net::websocket::futures::WebSocket::open(&url)
            .map_err(|e| FeedError::Connect(format!("{e:?}")))?;

        get_logger().info(
            LogComponent::Infrastructure("BinanceDepth"),
            &format!("✅ Connected to depth stream: {}", self.symbol.value()),
        );

        Ok(ws)
    }

    /// Extract the best-bid quote from one text frame.
    pub fn parse_message(&self, data: &str) -> Result<PriceQuote, FeedError> {
        let update: DepthUpdate =
            serde_json::from_str(data).map_err(|e| FeedError::Deserialize(e.to_string()))?;

        let raw = update.best_bid().ok_or(FeedError::MissingBestBid)?;
        let price = raw.parse::<f64>().map_err(|_| FeedError::BadPrice(raw.to_string()))?;

        PriceQuote::try_new(price).map_err(FeedError::Quote)
    }

    /// Apply one text frame: a good quote reaches the handler, a bad frame is
    /// discarded with a diagnostic and the previous quote stays in force.
    pub fn handle_text_frame<F>(&self, data: &str, handler: &mut F)
    where
        F: FnMut(PriceQuote),
    {
        match self.parse_message(data) {
            Ok(quote) => {
                get_logger().debug(
                    LogComponent::Infrastructure("BinanceDepth"),
                    &format!("📊 Best bid for {}: {}", self.symbol.value(), quote.value()),
                );
                handler(quote);
            }
            Err(e) => {
                get_logger().error(
                    LogComponent::Infrastructure("BinanceDepth"),
                    &format!("❌ Discarding message: {e}"),
                );
            }
        }
    }

    /// Run the stream with a quote handler.
    pub async fn run_stream<F>(&mut self, handler: F) -> Result<(), FeedError>
    where
        F: FnMut(PriceQuote) + 'static,
    {
        self.run_with_reconnect(handler, || {}).await
    }

    pub async fn run_stream_with_callback<F, R>(
        &mut self,
        handler: F,
        on_disconnect: R,
    ) -> Result<(), FeedError>
    where
        F: FnMut(PriceQuote) + 'static,
        R: FnMut(),
    {
        self.run_with_reconnect(handler, on_disconnect).await
    }

    async fn run_with_reconnect<F, R>(
        &mut self,
        mut handler: F,
        mut on_disconnect: R,
    ) -> Result<(), FeedError>
    where
        F: FnMut(PriceQuote) + 'static,
        R: FnMut(),
    {
        use gloo_timers::future::sleep;
        use std::time::Duration;

        let mut delay = 1u64;
        loop {
            let mut stream = match self.connect() {
                Ok(ws) => {
                    delay = 1;
                    ws
                }
                Err(e) => {
                    get_logger().error(
                        LogComponent::Infrastructure("BinanceDepth"),
                        &format!("❌ Connection error: {e}"),
                    );
                    on_disconnect();
                    sleep(Duration::from_secs(delay)).await;
                    delay = (delay * 2).min(32);
                    continue;
                }
            };

            while let Some(msg) = stream.next().await {
                match msg {
                    Ok(gloo_net::websocket::Message::Text(data)) => {
                        self.handle_text_frame(&data, &mut handler);
                    }
                    Ok(_) => {
                        // Ignore binary frames
                    }
                    Err(e) => {
                        get_logger().error(
                            LogComponent::Infrastructure("BinanceDepth"),
                            &format!("❌ WebSocket error: {e:?}"),
                        );
                        break;
                    }
                }
            }

            get_logger().warn(
                LogComponent::Infrastructure("BinanceDepth"),
                &format!("🔌 Reconnecting in {delay}s"),
            );
            on_disconnect();
            sleep(Duration::from_secs(delay)).await;
            delay = (delay * 2).min(32);
        }
    }
}

/// Owning handle for one live subscription.
///
/// Closing aborts the stream future on the spot. Close is idempotent and
/// also runs on drop, so teardown releases the connection exactly once no
/// matter which path gets there first.
pub struct DepthStreamHandle {
    abort: AbortHandle,
    closed: Cell<bool>,
}

impl DepthStreamHandle {
    pub fn new(abort: AbortHandle) -> Self {
        Self { abort, closed: Cell::new(false) }
    }

    pub fn close(&self) {
        if !self.closed.replace(true) {
            self.abort.abort();
            get_logger()
                .info(LogComponent::Infrastructure("BinanceDepth"), "🔌 Depth stream closed");
        }
    }

    pub fn is_closed(&self) -> bool {
        self.closed.get()
    }
}

impl Drop for DepthStreamHandle {
    fn drop(&mut self) {
        self.close();
    }
}

/// Spawn the depth stream as an abortable task and hand back its handle.
pub fn spawn_depth_stream<F, R>(symbol: Symbol, handler: F, on_disconnect: R) -> DepthStreamHandle
where
    F: FnMut(PriceQuote) + 'static,
    R: FnMut() + 'static,
{
    let (abort, registration) = AbortHandle::new_pair();

    let mut client = BinanceDepthClient::new(symbol);
    let stream = Abortable::new(
        async move {
            if let Err(e) = client.run_stream_with_callback(handler, on_disconnect).await {
                get_logger().error(
                    LogComponent::Infrastructure("BinanceDepth"),
                    &format!("❌ Stream error: {e}"),
                );
            }
        },
        registration,
    );
    wasm_bindgen_futures::spawn_local(async move {
        let _ = stream.await;
    });

    DepthStreamHandle::new(abort)
}
