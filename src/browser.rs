//! Chrome/Chromium discovery and launch.

use crate::error::RenderError;
use chromiumoxide::browser::{Browser, BrowserConfigBuilder, HeadlessMode};
use chromiumoxide::fetcher::{BrowserFetcher, BrowserFetcherOptions};
use futures::StreamExt;
use std::path::PathBuf;
use std::time::Duration;
use tokio::task::{self, JoinHandle};
use tracing::{debug, info, warn};

pub(crate) const CHROME_USER_AGENT: &str =
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36";

/// Find a Chrome/Chromium executable on the system.
///
/// `CHROMIUM_PATH` overrides all other discovery.
pub async fn find_browser_executable() -> Result<PathBuf, RenderError> {
    if let Ok(path) = std::env::var("CHROMIUM_PATH") {
        let path = PathBuf::from(path);
        if path.exists() {
            info!("using browser from CHROMIUM_PATH: {}", path.display());
            return Ok(path);
        }
        warn!(
            "CHROMIUM_PATH points to non-existent file: {}",
            path.display()
        );
    }

    let paths: Vec<PathBuf> = if cfg!(target_os = "windows") {
        [
            r"C:\Program Files\Google\Chrome\Application\chrome.exe",
            r"C:\Program Files (x86)\Google\Chrome\Application\chrome.exe",
            r"C:\Program Files\Chromium\Application\chrome.exe",
        ]
        .iter()
        .map(PathBuf::from)
        .collect()
    } else if cfg!(target_os = "macos") {
        [
            "/Applications/Google Chrome.app/Contents/MacOS/Google Chrome",
            "/Applications/Chromium.app/Contents/MacOS/Chromium",
            "/opt/homebrew/bin/chromium",
        ]
        .iter()
        .map(PathBuf::from)
        .collect()
    } else {
        [
            "/usr/bin/google-chrome",
            "/usr/bin/google-chrome-stable",
            "/usr/bin/chromium",
            "/usr/bin/chromium-browser",
            "/snap/bin/chromium",
            "/opt/google/chrome/chrome",
        ]
        .iter()
        .map(PathBuf::from)
        .collect()
    };

    for path in paths {
        if path.exists() {
            info!("found browser at: {}", path.display());
            return Ok(path);
        }
    }

    if !cfg!(target_os = "windows") {
        for cmd in &["chromium", "chromium-browser", "google-chrome", "chrome"] {
            if let Ok(output) = std::process::Command::new("which").arg(cmd).output()
                && output.status.success()
            {
                let found = String::from_utf8_lossy(&output.stdout).trim().to_string();
                if !found.is_empty() {
                    let path = PathBuf::from(found);
                    info!("found browser via 'which': {}", path.display());
                    return Ok(path);
                }
            }
        }
    }

    Err(RenderError::Session(
        "Chrome/Chromium executable not found".to_string(),
    ))
}

/// Download a managed Chromium when none is installed locally.
pub async fn download_managed_browser() -> Result<PathBuf, RenderError> {
    info!("downloading managed Chromium browser");

    let cache_dir = dirs::cache_dir()
        .unwrap_or_else(std::env::temp_dir)
        .join("faqscrape")
        .join("chromium");
    std::fs::create_dir_all(&cache_dir)
        .map_err(|e| RenderError::Session(format!("failed to create browser cache dir: {e}")))?;

    let fetcher = BrowserFetcher::new(
        BrowserFetcherOptions::builder()
            .with_path(&cache_dir)
            .build()
            .map_err(|e| RenderError::Session(format!("failed to build fetcher options: {e}")))?,
    );

    let revision_info = fetcher
        .fetch()
        .await
        .map_err(|e| RenderError::Session(format!("failed to fetch browser: {e}")))?;

    info!(
        "downloaded Chromium to: {}",
        revision_info.folder_path.display()
    );
    Ok(revision_info.executable_path)
}

/// Browser plus its event-handler task and profile directory.
///
/// The handler MUST be aborted when the browser goes away or it runs
/// forever; Drop covers the failure paths.
pub struct BrowserWrapper {
    browser: Browser,
    handler: JoinHandle<()>,
    user_data_dir: Option<PathBuf>,
}

impl BrowserWrapper {
    pub fn browser(&self) -> &Browser {
        &self.browser
    }

    /// Close the browser process and remove its profile directory.
    pub async fn shutdown(mut self) {
        if let Err(e) = self.browser.close().await {
            warn!("failed to close browser: {e}");
        }
        let _ = self.browser.wait().await;
        self.handler.abort();
        self.cleanup_temp_dir();
    }

    fn cleanup_temp_dir(&mut self) {
        if let Some(path) = self.user_data_dir.take()
            && let Err(e) = std::fs::remove_dir_all(&path)
        {
            warn!("failed to clean up profile dir {}: {e}", path.display());
        }
    }
}

impl Drop for BrowserWrapper {
    fn drop(&mut self) {
        self.handler.abort();
        if self.user_data_dir.is_some() {
            self.cleanup_temp_dir();
        }
    }
}

/// Launch a hardened browser instance with a unique profile directory.
///
/// Each render call gets its own session; expansion state and captured
/// markup are call-scoped, so sessions are never shared.
pub async fn launch_browser(headless: bool) -> Result<BrowserWrapper, RenderError> {
    let chrome_path = match find_browser_executable().await {
        Ok(path) => path,
        Err(_) => download_managed_browser().await?,
    };

    let user_data_dir = std::env::temp_dir().join(format!(
        "faqscrape_chrome_{}_{}",
        std::process::id(),
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .map(|d| d.as_nanos())
            .unwrap_or_default()
    ));
    std::fs::create_dir_all(&user_data_dir)
        .map_err(|e| RenderError::Session(format!("failed to create profile dir: {e}")))?;

    let mut config_builder = BrowserConfigBuilder::default()
        .request_timeout(Duration::from_secs(30))
        .window_size(1920, 1080)
        .user_data_dir(user_data_dir.clone())
        .chrome_executable(chrome_path);

    if headless {
        config_builder = config_builder.headless_mode(HeadlessMode::default());
    } else {
        config_builder = config_builder.with_head();
    }

    config_builder = config_builder
        .arg(format!("--user-agent={CHROME_USER_AGENT}"))
        .arg("--no-sandbox")
        .arg("--disable-dev-shm-usage")
        .arg("--disable-gpu")
        .arg("--disable-extensions")
        .arg("--disable-software-rasterizer")
        .arg("--disable-notifications")
        .arg("--no-first-run")
        .arg("--no-default-browser-check")
        .arg("--hide-scrollbars")
        .arg("--mute-audio");

    let browser_config = config_builder
        .build()
        .map_err(|e| RenderError::Session(format!("failed to build browser config: {e}")))?;

    let (browser, mut handler) = Browser::launch(browser_config)
        .await
        .map_err(|e| RenderError::Session(format!("failed to launch browser: {e}")))?;

    let handler_task = task::spawn(async move {
        while let Some(event) = handler.next().await {
            if let Err(e) = event {
                // Chrome emits CDP events chromiumoxide cannot always
                // deserialize; those are noise, not failures
                let msg = e.to_string();
                let benign = msg.contains("data did not match any variant of untagged enum Message")
                    || msg.contains("Failed to deserialize WS response");
                if !benign {
                    warn!("browser handler error: {e:?}");
                } else {
                    debug!("suppressed benign CDP serialization error: {msg}");
                }
            }
        }
        debug!("browser handler task completed");
    });

    Ok(BrowserWrapper {
        browser,
        handler: handler_task,
        user_data_dir: Some(user_data_dir),
    })
}
