// src/grid.rs
//
// Listing implementation over the live DevExpress grid on the members page.
// All identifiers below come straight from the rendered WebForms markup;
// the column mapping is positional, and nothing validates it against the
// page's header row (the site has no stable schema to validate against).

use std::time::Duration;

use async_trait::async_trait;
use thirtyfour::prelude::*;

use crate::config::consts::{
    HEADER_SCROLL_BACK_PX, POLL_INTERVAL, RESERVED_TAIL, SCROLL_SETTLE_MS, WAIT_TIMEOUT,
};
use crate::error::{Error, Result};
use crate::listing::Listing;
use crate::record::{DetailFields, RowFields};

const MAIN_TABLE_ID: &str = "ctl00_ContentPlaceHolder1_LawyersGrid_DXMainTable";
const PAGE_SIZE_BUTTON_ID: &str = "ctl00_ContentPlaceHolder1_LawyersGrid_DXPagerBottom_PSB";
const DATA_ROW_ID_PREFIX: &str = "ctl00_ContentPlaceHolder1_LawyersGrid_DXDataRow";
const PAGER_LINKS_XPATH: &str = "//a[contains(@class, 'dxp-num')]";
const CURRENT_PAGE_CSS: &str = "b.dxp-current";
const ROWS_XPATH: &str = "//table[@id='ctl00_ContentPlaceHolder1_LawyersGrid_DXMainTable']\
                          /tbody/tr[contains(@id, 'DXDataRow')]";
const DETAILS_LINK_XPATH: &str = ".//a[contains(@id, 'btnPrintLicense')]";

const TXT_NAME_ID: &str = "ctl00_ContentPlaceHolder1_TxtName_I";
const TXT_ADDRESS_ID: &str = "ctl00_ContentPlaceHolder1_TxtAddress_I";
const TXT_POSTAL_CODE_ID: &str = "ctl00_ContentPlaceHolder1_TxtPostalCode_I";
const TXT_EMAIL_ID: &str = "ctl00_ContentPlaceHolder1_TxtEmail_I";
const TXT_URL_ID: &str = "ctl00_ContentPlaceHolder1_TxtUrl_I";
const TXT_MOBILE_ID: &str = "ctl00_ContentPlaceHolder1_txtMobile_I";

// Listing columns by position; cell 0 holds the row's action buttons.
const CELL_FULL_NAME: usize = 1;
const CELL_GREEK_NAME: usize = 2;
const CELL_PHONE: usize = 3;
const CELL_FAX: usize = 4;
const CELL_COURT_BOX: usize = 5;
const CELL_PROVINCE: usize = 6;

pub struct Grid {
    driver: WebDriver,
    page_size: u32,
}

impl Grid {
    pub fn new(driver: WebDriver, page_size: u32) -> Self {
        Self { driver, page_size }
    }

    /// Bounded wait for an element; the walker treats the timeout as a
    /// failed wait condition, not as a missing-element error.
    async fn wait_for(&self, by: By, what: &str) -> Result<WebElement> {
        self.driver
            .query(by)
            .wait(WAIT_TIMEOUT, POLL_INTERVAL)
            .first()
            .await
            .map_err(|_| Error::Timeout(s!(what)))
    }

    /// Click through the DOM API. The pager controls sit behind the grid's
    /// own mouse handling and reject plain WebDriver clicks.
    async fn js_click(&self, elem: &WebElement) -> Result<()> {
        self.driver
            .execute("arguments[0].click();", vec![elem.to_json()?])
            .await?;
        Ok(())
    }

    async fn data_rows(&self) -> Result<Vec<WebElement>> {
        Ok(self.driver.find_all(By::XPath(ROWS_XPATH)).await?)
    }

    async fn data_row(&self, index: usize) -> Result<WebElement> {
        let rows = self.data_rows().await?;
        let count = rows.len();
        rows.into_iter()
            .nth(index)
            .ok_or_else(|| Error::NotFound(format!("row {index} (page has {count})")))
    }

    async fn cell_text(cells: &[WebElement], index: usize) -> Result<String> {
        let cell = cells
            .get(index)
            .ok_or_else(|| Error::NotFound(format!("row cell {index}")))?;
        Ok(cell.text().await?)
    }

    async fn input_value(&self, id: &'static str) -> Result<String> {
        let field = self.driver.find(By::Id(id)).await?;
        Ok(field.value().await?.unwrap_or_default())
    }
}

#[async_trait]
impl Listing for Grid {
    async fn visible_pages(&self) -> Result<Vec<u32>> {
        let links = self.driver.find_all(By::XPath(PAGER_LINKS_XPATH)).await?;
        if links.len() <= RESERVED_TAIL {
            return Ok(Vec::new());
        }
        let numbered = &links[..links.len() - RESERVED_TAIL];
        let mut pages = Vec::with_capacity(numbered.len());
        for link in numbered {
            let text = link.text().await?;
            if let Ok(n) = text.trim().parse::<u32>() {
                pages.push(n);
            }
        }
        Ok(pages)
    }

    async fn current_page(&self) -> Result<Option<u32>> {
        match self.driver.find(By::Css(CURRENT_PAGE_CSS)).await {
            Ok(indicator) => Ok(indicator.text().await?.trim().parse().ok()),
            Err(_) => Ok(None),
        }
    }

    async fn activate_page(&self, page: u32) -> Result<()> {
        // The grid's activation handlers are zero-based.
        let xpath = format!(
            "//a[contains(@onclick, 'PN{}') and contains(@class, 'dxp-num')]",
            page - 1
        );
        let link = self.driver.find(By::XPath(xpath)).await?;
        link.click().await?;
        Ok(())
    }

    async fn await_current(&self, page: u32) -> Result<()> {
        let xpath = format!("//b[contains(@class, 'dxp-current') and contains(., '{page}')]");
        self.wait_for(By::XPath(xpath), "current-page indicator")
            .await?;
        Ok(())
    }

    async fn await_page_control(&self, page: u32) -> Result<()> {
        let xpath = format!("//a[contains(@class, 'dxp-num') and contains(., '{page}')]");
        self.wait_for(By::XPath(xpath), "revealed page control")
            .await?;
        Ok(())
    }

    async fn apply_page_size(&self) -> Result<()> {
        let button = self.driver.find(By::Id(PAGE_SIZE_BUTTON_ID)).await?;
        self.js_click(&button).await?;

        let option_xpath = format!("//span[text()='{}']", self.page_size);
        let option = self.wait_for(By::XPath(option_xpath), "page size option").await?;
        self.js_click(&option).await?;

        // A full page re-renders the last expected row id. The final page
        // holds the remainder and never does, so a missed refill with the
        // grid still present is not a failure.
        let last_row_id = format!("{}{}", DATA_ROW_ID_PREFIX, self.page_size - 1);
        if self.wait_for(By::Id(last_row_id), "grid refill").await.is_err() {
            if !self.at_listing().await? {
                return Err(Error::Timeout(s!("grid refill")));
            }
            logd!("Short page after size change; continuing");
        }
        Ok(())
    }

    async fn at_listing(&self) -> Result<bool> {
        Ok(self.driver.find(By::Id(MAIN_TABLE_ID)).await.is_ok())
    }

    async fn back_to_listing(&self) -> Result<()> {
        self.driver.back().await?;
        self.wait_for(By::Id(MAIN_TABLE_ID), "listing root").await?;
        Ok(())
    }

    async fn row_count(&self) -> Result<usize> {
        Ok(self.data_rows().await?.len())
    }

    async fn read_row(&self, index: usize) -> Result<RowFields> {
        let row = self.data_row(index).await?;
        let cells = row.find_all(By::Tag("td")).await?;
        Ok(RowFields {
            full_name: Self::cell_text(&cells, CELL_FULL_NAME).await?,
            greek_name: Self::cell_text(&cells, CELL_GREEK_NAME).await?,
            phone: Self::cell_text(&cells, CELL_PHONE).await?,
            fax: Self::cell_text(&cells, CELL_FAX).await?,
            court_box: Self::cell_text(&cells, CELL_COURT_BOX).await?,
            province: Self::cell_text(&cells, CELL_PROVINCE).await?,
        })
    }

    async fn open_details(&self, index: usize) -> Result<()> {
        let row = self.data_row(index).await?;
        let link = row.find(By::XPath(DETAILS_LINK_XPATH)).await?;

        // Bring the link out from under the sticky header before clicking.
        self.driver
            .execute("arguments[0].scrollIntoView(true);", vec![link.to_json()?])
            .await?;
        self.driver
            .execute(&format!("window.scrollBy(0, -{HEADER_SCROLL_BACK_PX});"), vec![])
            .await?;
        tokio::time::sleep(Duration::from_millis(SCROLL_SETTLE_MS)).await;

        link.click().await?;
        self.wait_for(By::Id(TXT_NAME_ID), "detail view").await?;
        Ok(())
    }

    async fn read_details(&self) -> Result<DetailFields> {
        Ok(DetailFields {
            alternative_name: self.input_value(TXT_NAME_ID).await?,
            address: self.input_value(TXT_ADDRESS_ID).await?,
            postal_code: self.input_value(TXT_POSTAL_CODE_ID).await?,
            email: self.input_value(TXT_EMAIL_ID).await?,
            url: self.input_value(TXT_URL_ID).await?,
            mobile: self.input_value(TXT_MOBILE_ID).await?,
        })
    }
}
