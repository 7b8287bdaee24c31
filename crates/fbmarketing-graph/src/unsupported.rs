//! Marketing API endpoints reserved but not yet implemented
//!
//! Each endpoint is a variant of [`UnsupportedEndpoint`] and a method of the
//! same name on [`FacebookClient`]. Calling one returns
//! [`GraphError::NotImplemented`] without touching the network.

use std::fmt;

use serde_json::Value;
use tracing::debug;

use crate::client::FacebookClient;
use crate::GraphError;

macro_rules! unsupported_endpoints {
    ($($variant:ident => $method:ident,)+) => {
        /// A catalogued Marketing API endpoint with no implementation
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum UnsupportedEndpoint {
            $($variant,)+
        }

        impl UnsupportedEndpoint {
            /// Every catalogued endpoint
            pub const ALL: &'static [UnsupportedEndpoint] = &[
                $(UnsupportedEndpoint::$variant,)+
            ];

            /// Name of the client method reserved for this endpoint
            pub const fn name(self) -> &'static str {
                match self {
                    $(UnsupportedEndpoint::$variant => stringify!($method),)+
                }
            }
        }

        impl FacebookClient {
            $(
                #[doc = concat!(
                    "Reserved endpoint; always fails with `GraphError::NotImplemented(UnsupportedEndpoint::",
                    stringify!($variant),
                    ")`."
                )]
                pub fn $method(&self) -> Result<Value, GraphError> {
                    self.unsupported(UnsupportedEndpoint::$variant)
                }
            )+
        }
    };
}

unsupported_endpoints! {
    CreateAdLeads => create_ad_leads,
    GetAdCreatives => get_ad_creatives,
    GetAdCopies => get_ad_copies,
    CreateAdCopies => create_ad_copies,
    GetAdInsights => get_ad_insights,
    CreateAdInsights => create_ad_insights,
    GetAdKeywordStats => get_ad_keyword_stats,
    GetAdPreviews => get_ad_previews,
    GetAdTargetingSentenceLines => get_ad_targeting_sentence_lines,
    GetAdAccountActivities => get_ad_account_activities,
    GetAdAccountAdPlacePageSets => get_ad_account_ad_place_page_sets,
    CreateAdAccountAdPlacePageSets => create_ad_account_ad_place_page_sets,
    GetAdAccountAdStudies => get_ad_account_ad_studies,
    GetAdAccountAdAssetFeeds => get_ad_account_ad_asset_feeds,
    GetAdAccountAdCreatives => get_ad_account_ad_creatives,
    CreateAdAccountAdCreatives => create_ad_account_ad_creatives,
    GetAdAccountAdCreativesByLabels => get_ad_account_ad_creatives_by_labels,
    GetAdAccountAdImages => get_ad_account_ad_images,
    CreateAdAccountAdImages => create_ad_account_ad_images,
    DeleteAdAccountAdImages => delete_ad_account_ad_images,
    GetAdAccountAdLabels => get_ad_account_ad_labels,
    CreateAdAccountAdLabels => create_ad_account_ad_labels,
    GetAdAccountAdReportRuns => get_ad_account_ad_report_runs,
    GetAdAccountAdReportSchedules => get_ad_account_ad_report_schedules,
    GetAdAccountAdRulesLibrary => get_ad_account_ad_rules_library,
    CreateAdAccountAdRulesLibrary => create_ad_account_ad_rules_library,
    GetAdAccountAds => get_ad_account_ads,
    CreateAdAccountAds => create_ad_account_ads,
    GetAdAccountAdsByLabel => get_ad_account_ads_by_label,
    GetAdAccountAdsets => get_ad_account_adsets,
    CreateAdAccountAdsets => create_ad_account_adsets,
    GetAdAccountAdsetsByLabels => get_ad_account_adsets_by_labels,
    GetAdAccountAdsPixel => get_ad_account_ads_pixel,
    CreateAdAccountAdsPixel => create_ad_account_ads_pixel,
    GetAdAccountAdtoplinedetails => get_ad_account_adtoplinedetails,
    GetAdAccountAdtoplines => get_ad_account_adtoplines,
    GetAdAccountAdvertisableApplications => get_ad_account_advertisable_applications,
    GetAdAccountAdvideos => get_ad_account_advideos,
    CreateAdAccountAdvideos => create_ad_account_advideos,
    GetAdAccountAnRoas => get_ad_account_an_roas,
    GetAdAccountApplications => get_ad_account_applications,
    GetAdAccountAsyncRequests => get_ad_account_async_requests,
    GetAdAccountAsyncadrequestsets => get_ad_account_asyncadrequestsets,
    CreateAdAccountAsyncadrequestsets => create_ad_account_asyncadrequestsets,
    GetAdAccountBroadtargetingcategories => get_ad_account_broadtargetingcategories,
    GetAdAccountBusinessActivities => get_ad_account_business_activities,
    GetAdAccountCampaigns => get_ad_account_campaigns,
    CreateAdAccountCampaigns => create_ad_account_campaigns,
    DeleteAdAccountCampaigns => delete_ad_account_campaigns,
    GetAdAccountCampaignsByLabel => get_ad_account_campaigns_by_label,
    GetAdAccountContextualTargetingBrowse => get_ad_account_contextual_targeting_browse,
    GetAdAccountCustomAudiences => get_ad_account_custom_audiences,
    CreateAdAccountCustomAudiences => create_ad_account_custom_audiences,
    GetAdAccountCustomAudiencestos => get_ad_account_custom_audiencestos,
    GetAdAccountDeliveryEstimate => get_ad_account_delivery_estimate,
    GetAdAccountGeneratePreviews => get_ad_account_generate_previews,
    GetAdAccountInsights => get_ad_account_insights,
    CreateAdAccountInsights => create_ad_account_insights,
    GetAdAccountInstagramAccounts => get_ad_account_instagram_accounts,
    GetAdAccountMinimumBudgets => get_ad_account_minimum_budgets,
    GetAdAccountOfflineConversionDataSets => get_ad_account_offline_conversion_data_sets,
    GetAdAccountOffsitepixels => get_ad_account_offsitepixels,
    CreateAccountAdOffsitepixels => create_account_ad_offsitepixels,
    GetAdAccountPartnercategories => get_ad_account_partnercategories,
    GetAdAccountPartners => get_ad_account_partners,
    GetAdAccountPublisherBlockLists => get_ad_account_publisher_block_lists,
    CreateAdAccountPublisherBlockLists => create_ad_account_publisher_block_lists,
    GetAdAccountRatecard => get_ad_account_ratecard,
    GetAdAccountReachestimate => get_ad_account_reachestimate,
    GetAdAccountReachFrequencyPredictions => get_ad_account_reach_frequency_predictions,
    CreateAdAccountReachFrequencyPredictions => create_ad_account_reach_frequency_predictions,
    GetAdAccountRoas => get_ad_account_roas,
    GetAdAccountRuleExecutionHistory => get_ad_account_rule_execution_history,
    GetAdAccountTargetingBrowse => get_ad_account_targeting_browse,
    GetAdAccountTargetingSearch => get_ad_account_targeting_search,
    GetAdAccountTargetingSentenceLines => get_ad_account_targeting_sentence_lines,
    GetAdAccountTargetingSuggestions => get_ad_account_targeting_suggestions,
    GetAdAccountTargetingValidations => get_ad_account_targeting_validations,
    GetAdAccountTargetingTracking => get_ad_account_targeting_tracking,
    CreateAdAccountTargetingTracking => create_ad_account_targeting_tracking,
    DeleteAdAccountTargetingTracking => delete_ad_account_targeting_tracking,
    GetAdAccountTargetingTransactions => get_ad_account_targeting_transactions,
    GetAdAccountUsers => get_ad_account_users,
}

impl UnsupportedEndpoint {
    /// Looks up an endpoint by its method name, e.g. `get_ad_account_campaigns`
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|e| e.name() == name)
    }
}

impl fmt::Display for UnsupportedEndpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FacebookClient {
    /// Fails with [`GraphError::NotImplemented`] for `endpoint`
    pub fn unsupported(&self, endpoint: UnsupportedEndpoint) -> Result<Value, GraphError> {
        debug!(endpoint = endpoint.name(), "Unsupported endpoint called");
        Err(GraphError::NotImplemented(endpoint))
    }
}
