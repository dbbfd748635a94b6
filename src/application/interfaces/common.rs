use crate::error::AppError;
use crate::model::group::ActionGroup;
use crate::model::query::Params;
use crate::model::responses::ApiResponse;
use async_trait::async_trait;

/// Global information about the service: countries, prices, translations
///
/// Every method maps to one action under `/Common` and returns the
/// normalized response untouched.
#[async_trait]
pub trait CommonService: Send + Sync {
    /// Request context of the `/Common` processor
    fn common_group(&self) -> &ActionGroup;

    /// Returns the default currency for a language
    async fn get_currency_by_lang(&self, lang: &str) -> Result<ApiResponse, AppError> {
        self.common_group()
            .get("GetCurrencyByLang", Params::new().with("lang", lang))
            .await
    }

    /// Returns the culture information of the current session
    async fn get_current_culture_info(&self) -> Result<ApiResponse, AppError> {
        self.common_group()
            .get("GetCurrentCultureInfo", Params::new())
            .await
    }

    /// Returns the current settings: timezones, currencies, languages and so on
    async fn get_current_settings(&self) -> Result<ApiResponse, AppError> {
        self.common_group()
            .get("GetCurrentSettings", Params::new())
            .await
    }

    /// Downloads a file by UUID, usually a binary response
    async fn get_file(&self, file_uuid: &str) -> Result<ApiResponse, AppError> {
        self.common_group()
            .get("GetFile", Params::new().with("file_uuid", file_uuid))
            .await
    }

    /// Formats a price for the locale of the given IP
    async fn get_formatted_price(&self, ip: Option<&str>) -> Result<ApiResponse, AppError> {
        self.common_group()
            .get("GetFormattedPrice", Params::new().with("ip", ip))
            .await
    }

    /// Looks up country and location of an IP address
    async fn get_geo_ip_information(&self, ip: &str) -> Result<ApiResponse, AppError> {
        self.common_group()
            .get("GetGeoIPInformation", Params::new().with("ip", ip))
            .await
    }

    /// Returns a page preview image of a fax or file
    ///
    /// # Arguments
    /// * `uuid` - Fax or file UUID
    /// * `page_no` - Page number, starting at 1
    /// * `max_width` - Optional maximum width in pixels
    /// * `max_height` - Optional maximum height in pixels
    async fn get_page_preview(
        &self,
        uuid: &str,
        page_no: u32,
        max_width: Option<u32>,
        max_height: Option<u32>,
    ) -> Result<ApiResponse, AppError> {
        let params = Params::new()
            .with("uuid", uuid)
            .with("page_no", page_no)
            .with("max_width", max_width)
            .with("max_height", max_height);
        self.common_group().get("GetPagePreview", params).await
    }

    /// Lists the cities of a country
    async fn list_cities(&self, country_code_a3: &str) -> Result<ApiResponse, AppError> {
        self.common_group()
            .get(
                "ListCities",
                Params::new().with("country_code_a3", country_code_a3),
            )
            .await
    }

    /// Lists all countries, translated to `culture` when given
    async fn list_countries(&self, culture: Option<&str>) -> Result<ApiResponse, AppError> {
        self.common_group()
            .get("ListCountries", Params::new().with("culture", culture))
            .await
    }

    /// Lists the countries of a price zone
    async fn list_countries_for_zone(&self, zone: &str) -> Result<ApiResponse, AppError> {
        self.common_group()
            .get("ListCountriesForZone", Params::new().with("zone", zone))
            .await
    }

    /// Lists fax prices per country
    async fn list_countries_prices(&self, language: Option<&str>) -> Result<ApiResponse, AppError> {
        self.common_group()
            .get("ListCountriesPrices", Params::new().with("language", language))
            .await
    }

    /// Lists the states of a country
    async fn list_country_states(
        &self,
        country_code: Option<&str>,
    ) -> Result<ApiResponse, AppError> {
        self.common_group()
            .get(
                "ListCountryStates",
                Params::new().with("country_code", country_code),
            )
            .await
    }

    /// Lists supported currencies, or a single one by code
    async fn list_currencies(&self, code: Option<&str>) -> Result<ApiResponse, AppError> {
        self.common_group()
            .get("ListCurrencies", Params::new().with("code", code))
            .await
    }

    /// Lists the destinations of a price zone
    async fn list_destinations_for_zone(&self, zone: &str) -> Result<ApiResponse, AppError> {
        self.common_group()
            .get("ListDestinationsForZone", Params::new().with("zone", zone))
            .await
    }

    /// Lists interface languages translated at least `min_percent_translated` percent
    async fn list_languages(
        &self,
        min_percent_translated: Option<u32>,
    ) -> Result<ApiResponse, AppError> {
        self.common_group()
            .get(
                "ListLanguages",
                Params::new().with("min_percent_translated", min_percent_translated),
            )
            .await
    }

    /// Returns translated strings by identifier
    async fn list_strings(
        &self,
        ids: Option<&[&str]>,
        culture: Option<&str>,
    ) -> Result<ApiResponse, AppError> {
        let params = Params::new().with("ids", ids).with("culture", culture);
        self.common_group().get("ListStrings", params).await
    }

    /// Lists the file types a fax can be composed from
    async fn list_supported_file_types(&self) -> Result<ApiResponse, AppError> {
        self.common_group()
            .get("ListSupportedFileTypes", Params::new())
            .await
    }

    /// Lists all timezones
    async fn list_timezones(&self) -> Result<ApiResponse, AppError> {
        self.common_group().get("ListTimezones", Params::new()).await
    }

    /// Lists released client versions
    async fn list_versions(&self, is_beta: Option<bool>) -> Result<ApiResponse, AppError> {
        self.common_group()
            .get("ListVersions", Params::new().with("is_beta", is_beta))
            .await
    }

    /// Lists zip codes of a city
    async fn list_zip_codes(
        &self,
        country_code_a3: &str,
        city_name_or_id: &str,
        exact: Option<bool>,
    ) -> Result<ApiResponse, AppError> {
        let params = Params::new()
            .with("country_code_a3", country_code_a3)
            .with("city_name_or_id", city_name_or_id)
            .with("exact", exact);
        self.common_group().get("ListZipCodes", params).await
    }

    /// Lists price zones
    async fn list_zones(&self) -> Result<ApiResponse, AppError> {
        self.common_group().get("ListZones", Params::new()).await
    }

    /// Changes the culture of the current session
    async fn set_culture(&self, language: &str) -> Result<ApiResponse, AppError> {
        self.common_group()
            .get("SetCulture", Params::new().with("language", language))
            .await
    }

    /// Starts building a zip archive with the selected user data
    ///
    /// Flags left `false` are not sent.
    #[allow(clippy::too_many_arguments)]
    async fn start_create_zip_archive(
        &self,
        user_id: &str,
        list_order: bool,
        list_trans: bool,
        list_snt_fax: bool,
        list_rec_fax: bool,
        arh_snt_fax: bool,
        arh_rec_fax: bool,
        person_data: bool,
        svd_add_book: bool,
        request: &str,
    ) -> Result<ApiResponse, AppError> {
        let params = Params::new()
            .with("user_id", user_id)
            .with("list_order", list_order)
            .with("list_trans", list_trans)
            .with("list_snt_fax", list_snt_fax)
            .with("list_rec_fax", list_rec_fax)
            .with("arh_snt_fax", arh_snt_fax)
            .with("arh_rec_fax", arh_rec_fax)
            .with("person_data", person_data)
            .with("svd_add_book", svd_add_book)
            .with("request", request);
        self.common_group()
            .get("startCreateZipArchive", params)
            .await
    }
}
