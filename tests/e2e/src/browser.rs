use anyhow::{Context, Result};
use headless_chrome::{Browser as ChromeBrowser, LaunchOptions, Tab};
use std::sync::Arc;
use std::time::{Duration, Instant};

pub struct Browser {
    browser: ChromeBrowser,
}

impl Browser {
    pub fn launch() -> Result<Self> {
        let options = LaunchOptions::default_builder()
            .headless(true)
            .window_size(Some((1280, 800)))
            .build()
            .map_err(|e| anyhow::anyhow!("invalid launch options: {e}"))?;

        let browser = ChromeBrowser::new(options)?;

        Ok(Self { browser })
    }

    pub fn new_page(&self) -> Result<Page> {
        let tab = self.browser.new_tab()?;
        Ok(Page { tab })
    }
}

pub struct Page {
    tab: Arc<Tab>,
}

impl Page {
    pub fn goto(&self, url: &str) -> Result<()> {
        self.tab.navigate_to(url)?;
        self.tab.wait_until_navigated()?;
        Ok(())
    }

    pub fn find_element(&self, selector: &str) -> Result<String> {
        let element = self.tab.wait_for_element(selector)?;
        let text = element.get_inner_text()?;
        Ok(text)
    }

    pub fn click(&self, selector: &str) -> Result<()> {
        let element = self.tab.wait_for_element(selector)?;
        element.click()?;
        Ok(())
    }

    /// Evaluates `expression` in the page and returns its JSON value.
    pub fn eval(&self, expression: &str) -> Result<serde_json::Value> {
        let result = self.tab.evaluate(expression, false)?;
        Ok(result.value.unwrap_or(serde_json::Value::Null))
    }

    pub fn scroll_to(&self, y: f64) -> Result<()> {
        self.eval(&format!("window.scrollTo(0, {y}); window.dispatchEvent(new Event('scroll')); true"))?;
        Ok(())
    }

    /// Scrolls until the element with `id` sits just below the top edge.
    pub fn scroll_to_section(&self, id: &str) -> Result<()> {
        let top = self
            .eval(&format!(
                "document.getElementById('{id}').getBoundingClientRect().top + window.scrollY"
            ))?
            .as_f64()
            .with_context(|| format!("section #{id} not found"))?;
        self.scroll_to(top - 10.0)
    }

    /// Polls the inner text of `selector` until `predicate` accepts it,
    /// yielding to the runtime between attempts.
    pub async fn wait_for_text(
        &self,
        selector: &str,
        timeout: Duration,
        predicate: impl Fn(&str) -> bool,
    ) -> Result<String> {
        let deadline = Instant::now() + timeout;
        loop {
            if let Ok(text) = self.find_element(selector) {
                if predicate(&text) {
                    return Ok(text);
                }
            }
            if Instant::now() >= deadline {
                anyhow::bail!("timed out waiting for text on {selector}");
            }
            tokio::time::sleep(Duration::from_millis(100)).await;
        }
    }
}
