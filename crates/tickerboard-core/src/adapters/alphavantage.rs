use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

use serde::Deserialize;

use crate::config::QuoteApiConfig;
use crate::data_source::{QuoteProvider, SourceError};
use crate::http_client::{HttpClient, HttpRequest, ReqwestHttpClient};
use crate::{company_name, QuoteRecord, QuoteSource, Symbol};

/// Alpha Vantage `GLOBAL_QUOTE` adapter.
#[derive(Clone)]
pub struct AlphaVantageAdapter {
    http_client: Arc<dyn HttpClient>,
    config: QuoteApiConfig,
}

impl AlphaVantageAdapter {
    pub fn new(config: QuoteApiConfig) -> Self {
        Self::with_http_client(Arc::new(ReqwestHttpClient::new()), config)
    }

    pub fn with_http_client(http_client: Arc<dyn HttpClient>, config: QuoteApiConfig) -> Self {
        Self {
            http_client,
            config,
        }
    }

    pub fn config(&self) -> &QuoteApiConfig {
        &self.config
    }

    fn quote_request(&self, symbol: &Symbol) -> HttpRequest {
        HttpRequest::get(&self.config.endpoint)
            .with_query("function", "GLOBAL_QUOTE")
            .with_query("symbol", symbol.as_str())
            .with_query("apikey", &self.config.credential)
            .with_timeout_ms(self.config.timeout_ms)
    }

    async fn fetch_global_quote(&self, symbol: &Symbol) -> Result<QuoteRecord, SourceError> {
        let request = self.quote_request(symbol);
        tracing::debug!(
            symbol = %symbol,
            endpoint = %self.config.endpoint,
            "requesting global quote"
        );

        let response = self.http_client.execute(request).await.map_err(|e| {
            SourceError::unavailable(format!("alphavantage transport error: {}", e.message()))
        })?;

        if !response.is_success() {
            return Err(SourceError::unavailable(format!(
                "alphavantage returned status {}",
                response.status
            )));
        }

        let mut parsed: GlobalQuoteResponse = serde_json::from_str(&response.body).map_err(|e| {
            SourceError::invalid_response(format!("failed to parse alphavantage response: {e}"))
        })?;

        let Some(fields) = parsed.quote.take() else {
            return Err(SourceError::invalid_response(no_quote_message(&parsed)));
        };

        normalize_global_quote(symbol, fields)
    }
}

impl QuoteProvider for AlphaVantageAdapter {
    fn name(&self) -> &'static str {
        "alphavantage"
    }

    fn fetch_quote<'a>(
        &'a self,
        symbol: &'a Symbol,
    ) -> Pin<Box<dyn Future<Output = Result<QuoteRecord, SourceError>> + Send + 'a>> {
        Box::pin(self.fetch_global_quote(symbol))
    }
}

// Alpha Vantage reports every field as a string, including numbers.
#[derive(Debug, Clone, Deserialize)]
struct GlobalQuoteResponse {
    #[serde(rename = "Global Quote", default)]
    quote: Option<GlobalQuoteFields>,
    #[serde(rename = "Note", default)]
    note: Option<String>,
    #[serde(rename = "Information", default)]
    information: Option<String>,
    #[serde(rename = "Error Message", default)]
    error_message: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
struct GlobalQuoteFields {
    #[serde(rename = "01. symbol", default)]
    symbol: Option<String>,
    #[serde(rename = "05. price", default)]
    price: Option<String>,
    #[serde(rename = "06. volume", default)]
    volume: Option<String>,
    #[serde(rename = "09. change", default)]
    change: Option<String>,
    #[serde(rename = "10. change percent", default)]
    change_percent: Option<String>,
}

fn no_quote_message(response: &GlobalQuoteResponse) -> String {
    let detail = response
        .error_message
        .as_deref()
        .or(response.note.as_deref())
        .or(response.information.as_deref());
    match detail {
        Some(detail) => format!("no quote data in alphavantage response: {detail}"),
        None => String::from("no quote data in alphavantage response"),
    }
}

fn normalize_global_quote(
    requested: &Symbol,
    fields: GlobalQuoteFields,
) -> Result<QuoteRecord, SourceError> {
    let raw_symbol = required("01. symbol", fields.symbol)?;
    let symbol = Symbol::parse(&raw_symbol)
        .map_err(|e| SourceError::invalid_response(format!("invalid upstream symbol: {e}")))?;
    if &symbol != requested {
        return Err(SourceError::invalid_response(format!(
            "upstream returned {symbol} for {requested}"
        )));
    }

    let price = parse_decimal("05. price", &required("05. price", fields.price)?)?;
    if price < 0.0 {
        return Err(SourceError::invalid_response("05. price must be non-negative"));
    }
    let change = parse_decimal("09. change", &required("09. change", fields.change)?)?;
    let raw_percent = required("10. change percent", fields.change_percent)?;
    let change_percent = parse_decimal("10. change percent", strip_percent(&raw_percent))?;
    let raw_volume = required("06. volume", fields.volume)?;
    let volume = raw_volume.trim().parse::<u64>().map_err(|_| {
        SourceError::invalid_response(format!("06. volume is not an integer: '{raw_volume}'"))
    })?;

    Ok(QuoteRecord {
        name: company_name(&symbol),
        symbol,
        price,
        change,
        change_percent,
        volume,
        source: QuoteSource::Live,
    })
}

fn required(field: &'static str, value: Option<String>) -> Result<String, SourceError> {
    value
        .filter(|value| !value.trim().is_empty())
        .ok_or_else(|| SourceError::invalid_response(format!("missing field '{field}'")))
}

fn strip_percent(raw: &str) -> &str {
    let trimmed = raw.trim();
    trimmed.strip_suffix('%').unwrap_or(trimmed)
}

fn parse_decimal(field: &'static str, raw: &str) -> Result<f64, SourceError> {
    let value = raw.trim().parse::<f64>().map_err(|_| {
        SourceError::invalid_response(format!("{field} is not a number: '{raw}'"))
    })?;
    if !value.is_finite() {
        return Err(SourceError::invalid_response(format!("{field} must be finite")));
    }
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data_source::SourceErrorKind;
    use crate::http_client::{HttpError, HttpResponse};
    use std::sync::Mutex;

    const AAPL_BODY: &str = r#"{
        "Global Quote": {
            "01. symbol": "AAPL",
            "02. open": "187.1500",
            "03. high": "189.9900",
            "04. low": "186.7700",
            "05. price": "189.4300",
            "06. volume": "51234567",
            "07. latest trading day": "2025-03-14",
            "08. previous close": "187.4400",
            "09. change": "1.9900",
            "10. change percent": "1.0617%"
        }
    }"#;

    #[derive(Debug)]
    struct RecordingHttpClient {
        response: Result<HttpResponse, HttpError>,
        requests: Mutex<Vec<HttpRequest>>,
    }

    impl RecordingHttpClient {
        fn new(response: Result<HttpResponse, HttpError>) -> Self {
            Self {
                response,
                requests: Mutex::new(Vec::new()),
            }
        }

        fn recorded_requests(&self) -> Vec<HttpRequest> {
            self.requests
                .lock()
                .expect("request store should not be poisoned")
                .clone()
        }
    }

    impl HttpClient for RecordingHttpClient {
        fn execute<'a>(
            &'a self,
            request: HttpRequest,
        ) -> Pin<Box<dyn Future<Output = Result<HttpResponse, HttpError>> + Send + 'a>> {
            self.requests
                .lock()
                .expect("request store should not be poisoned")
                .push(request);
            let response = self.response.clone();
            Box::pin(async move { response })
        }
    }

    fn adapter_with(client: Arc<RecordingHttpClient>) -> AlphaVantageAdapter {
        let config = QuoteApiConfig::new("https://quotes.example.test/query", "alpha-key")
            .expect("valid config");
        AlphaVantageAdapter::with_http_client(client, config)
    }

    fn symbol(raw: &str) -> Symbol {
        Symbol::parse(raw).expect("valid symbol")
    }

    #[tokio::test]
    async fn request_carries_function_symbol_and_credential() {
        let client = Arc::new(RecordingHttpClient::new(Ok(HttpResponse::ok_json(AAPL_BODY))));
        let adapter = adapter_with(Arc::clone(&client));

        adapter.fetch_quote(&symbol("AAPL")).await.expect("quote");

        let requests = client.recorded_requests();
        assert_eq!(requests.len(), 1);
        let request = &requests[0];
        assert!(request.url.starts_with("https://quotes.example.test/query?"));
        assert_eq!(request.query_param("function").as_deref(), Some("GLOBAL_QUOTE"));
        assert_eq!(request.query_param("symbol").as_deref(), Some("AAPL"));
        assert_eq!(request.query_param("apikey").as_deref(), Some("alpha-key"));
        assert_eq!(request.timeout_ms, 5_000);
    }

    #[tokio::test]
    async fn global_quote_is_normalized_into_a_live_record() {
        let client = Arc::new(RecordingHttpClient::new(Ok(HttpResponse::ok_json(AAPL_BODY))));
        let record = adapter_with(client)
            .fetch_quote(&symbol("AAPL"))
            .await
            .expect("quote");

        assert_eq!(record.symbol.as_str(), "AAPL");
        assert_eq!(record.name, "Apple Inc.");
        assert_eq!(record.price, 189.43);
        assert_eq!(record.change, 1.99);
        assert_eq!(record.change_percent, 1.0617);
        assert_eq!(record.volume, 51_234_567);
        assert_eq!(record.source, QuoteSource::Live);
    }

    #[tokio::test]
    async fn missing_global_quote_reports_rate_limit_note() {
        let body = r#"{"Note": "Thank you for using Alpha Vantage! Our standard API call frequency is 5 calls per minute."}"#;
        let client = Arc::new(RecordingHttpClient::new(Ok(HttpResponse::ok_json(body))));
        let error = adapter_with(client)
            .fetch_quote(&symbol("MSFT"))
            .await
            .expect_err("no quote");

        assert_eq!(error.kind(), SourceErrorKind::InvalidResponse);
        assert!(error.message().contains("call frequency"));
    }

    #[tokio::test]
    async fn empty_global_quote_object_is_rejected() {
        let client = Arc::new(RecordingHttpClient::new(Ok(HttpResponse::ok_json(
            r#"{"Global Quote": {}}"#,
        ))));
        let error = adapter_with(client)
            .fetch_quote(&symbol("ZZZZ"))
            .await
            .expect_err("empty quote");

        assert_eq!(error.kind(), SourceErrorKind::InvalidResponse);
        assert!(error.message().contains("01. symbol"));
    }

    #[tokio::test]
    async fn non_success_status_is_unavailable() {
        let client = Arc::new(RecordingHttpClient::new(Ok(HttpResponse::with_status(
            503, "",
        ))));
        let error = adapter_with(client)
            .fetch_quote(&symbol("NFLX"))
            .await
            .expect_err("503");

        assert_eq!(error.kind(), SourceErrorKind::Unavailable);
        assert!(error.message().contains("503"));
    }

    #[tokio::test]
    async fn transport_error_is_unavailable() {
        let client = Arc::new(RecordingHttpClient::new(Err(HttpError::new(
            "connection refused",
        ))));
        let error = adapter_with(client)
            .fetch_quote(&symbol("XOM"))
            .await
            .expect_err("transport");

        assert_eq!(error.kind(), SourceErrorKind::Unavailable);
        assert!(error.message().contains("connection refused"));
    }

    #[test]
    fn percent_sign_is_stripped_before_parsing() {
        assert_eq!(strip_percent("-0.4512%"), "-0.4512");
        assert_eq!(strip_percent(" 2.5 "), "2.5");
        assert_eq!(parse_decimal("x", strip_percent("-0.4512%")).expect("number"), -0.4512);
    }

    #[test]
    fn malformed_number_is_rejected() {
        let fields = GlobalQuoteFields {
            symbol: Some(String::from("TSLA")),
            price: Some(String::from("n/a")),
            volume: Some(String::from("100")),
            change: Some(String::from("1.0")),
            change_percent: Some(String::from("0.5%")),
        };
        let error = normalize_global_quote(&symbol("TSLA"), fields).expect_err("bad price");
        assert!(error.message().contains("05. price"));
    }

    #[test]
    fn unchanged_quote_with_signed_zero_renders_as_positive() {
        let fields = GlobalQuoteFields {
            symbol: Some(String::from("AAPL")),
            price: Some(String::from("189.4300")),
            volume: Some(String::from("100")),
            change: Some(String::from("-0.0000")),
            change_percent: Some(String::from("-0.0000%")),
        };
        let record = normalize_global_quote(&symbol("AAPL"), fields).expect("valid quote");

        assert_eq!(crate::format::format_change(record.change), "+$0.00");
        assert_eq!(crate::format::format_percent(record.change_percent), "+0.00%");
    }

    #[test]
    fn mismatched_upstream_symbol_is_rejected() {
        let fields = GlobalQuoteFields {
            symbol: Some(String::from("GOOG")),
            price: Some(String::from("170.00")),
            volume: Some(String::from("100")),
            change: Some(String::from("1.0")),
            change_percent: Some(String::from("0.5%")),
        };
        let error = normalize_global_quote(&symbol("GOOGL"), fields).expect_err("mismatch");
        assert_eq!(error.kind(), SourceErrorKind::InvalidResponse);
    }
}
