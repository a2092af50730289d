// src/session.rs
//
// Explicitly owned browser session. Workers connect, hand clones of the
// driver handle to the grid, and must call close() on every exit path;
// there is no global handle anywhere.

use thirtyfour::prelude::*;

use crate::config::consts::DIRECTORY_URL;
use crate::error::Result;
use crate::params::Params;

pub struct Session {
    driver: WebDriver,
}

impl Session {
    /// Connect to the chromedriver endpoint and open the directory page.
    pub async fn connect(params: &Params) -> Result<Self> {
        let mut caps = DesiredCapabilities::chrome();
        if params.headless {
            caps.set_headless()?;
        }
        let driver = WebDriver::new(&params.webdriver_url, caps).await?;
        logf!("Session up against {}", params.webdriver_url);
        driver.goto(DIRECTORY_URL).await?;
        Ok(Self { driver })
    }

    pub fn driver(&self) -> &WebDriver {
        &self.driver
    }

    /// Release the browser. Consumes the session; a dropped session without
    /// close() leaks the browser process, which is why run_chunk calls this
    /// on both the success and the error path.
    pub async fn close(self) -> Result<()> {
        self.driver.quit().await?;
        Ok(())
    }
}
