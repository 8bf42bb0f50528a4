//! The closed set of supported Plaid operations.
//!
//! Each operation records the exact positional parameter order the legacy
//! client call signature required, plus the REST endpoint it maps to. The
//! parameter order is what makes translation from named request parameters
//! possible at all: the upstream API takes one structured body per call,
//! but callers address operations by the legacy ordered-argument names.

macro_rules! operations {
    ($( $variant:ident => ($name:literal, $endpoint:literal, [$($param:literal),* $(,)?]) ),+ $(,)?) => {
        /// A supported Plaid operation.
        ///
        /// Unknown operation names fail [`Operation::from_name`] up front;
        /// there is no open string dispatch against the client.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum Operation {
            $($variant,)+
        }

        impl Operation {
            /// Every supported operation.
            pub const ALL: &'static [Operation] = &[$(Operation::$variant),+];

            /// Look up an operation by its wire name. Case-sensitive.
            pub fn from_name(name: &str) -> Option<Self> {
                match name {
                    $($name => Some(Self::$variant),)+
                    _ => None,
                }
            }

            /// The camelCase wire name of this operation.
            pub fn name(&self) -> &'static str {
                match self {
                    $(Self::$variant => $name,)+
                }
            }

            /// Positional parameter order of the legacy call signature.
            /// Empty for zero-argument operations.
            pub fn parameter_order(&self) -> &'static [&'static str] {
                match self {
                    $(Self::$variant => &[$($param),*],)+
                }
            }

            /// REST endpoint path this operation posts to.
            pub fn endpoint(&self) -> &'static str {
                match self {
                    $(Self::$variant => $endpoint,)+
                }
            }
        }
    };
}

operations! {
    CreateAssetReport => ("createAssetReport", "/asset_report/create", ["accessTokens", "daysRequested", "options"]),
    CreateDepositSwitch => ("createDepositSwitch", "/deposit_switch/create", ["targetAccountId", "targetAccessToken", "options"]),
    CreateDepositSwitchToken => ("createDepositSwitchToken", "/deposit_switch/token/create", ["depositSwitchId", "options"]),
    CreateItemAddToken => ("createItemAddToken", "/item/add_token/create", ["options"]),
    CreatePayment => ("createPayment", "/payment_initiation/payment/create", ["recipientId", "reference", "amount"]),
    CreatePaymentRecipient => ("createPaymentRecipient", "/payment_initiation/recipient/create", ["name", "iban", "address"]),
    CreatePaymentToken => ("createPaymentToken", "/payment_initiation/payment/token/create", ["paymentId"]),
    CreateProcessorToken => ("createProcessorToken", "/processor/token/create", ["accessToken", "accountId", "processor"]),
    CreatePublicToken => ("createPublicToken", "/item/public_token/create", ["accessToken"]),
    CreateStripeToken => ("createStripeToken", "/processor/stripe/bank_account_token/create", ["accessToken", "accountId"]),
    DeleteItem => ("deleteItem", "/item/delete", ["accessToken"]),
    ExchangePublicToken => ("exchangePublicToken", "/item/public_token/exchange", ["publicToken"]),
    FilterAssetReport => ("filterAssetReport", "/asset_report/filter", ["assetReportToken", "accountIdsToExclude"]),
    GetAccounts => ("getAccounts", "/accounts/get", ["accessToken", "options"]),
    GetAllTransactions => ("getAllTransactions", "/transactions/get", ["accessToken", "startDate", "endDate", "options"]),
    GetAssetReport => ("getAssetReport", "/asset_report/get", ["assetReportToken", "includeInsights"]),
    GetAssetReportPdf => ("getAssetReportPdf", "/asset_report/pdf/get", ["assetReportToken"]),
    GetAuditCopy => ("getAuditCopy", "/asset_report/audit_copy/get", ["auditCopyToken"]),
    GetAuth => ("getAuth", "/auth/get", ["accessToken", "options"]),
    GetBalance => ("getBalance", "/accounts/balance/get", ["accessToken", "options"]),
    GetCategories => ("getCategories", "/categories/get", []),
    GetCreditDetails => ("getCreditDetails", "/credit_details/get", ["accessToken"]),
    GetDepositSwitch => ("getDepositSwitch", "/deposit_switch/get", ["depositSwitchId", "options"]),
    GetHoldings => ("getHoldings", "/investments/holdings/get", ["accessToken"]),
    GetIncome => ("getIncome", "/income/get", ["accessToken"]),
    GetInstitutionById => ("getInstitutionById", "/institutions/get_by_id", ["institutionId", "options"]),
    GetInstitutions => ("getInstitutions", "/institutions/get", ["count", "offset", "options"]),
    GetInvestmentTransactions => ("getInvestmentTransactions", "/investments/transactions/get", ["accessToken", "startDate", "endDate", "options"]),
    GetItem => ("getItem", "/item/get", ["accessToken"]),
    GetLiabilities => ("getLiabilities", "/liabilities/get", ["accessToken", "options"]),
    GetPayment => ("getPayment", "/payment_initiation/payment/get", ["paymentId"]),
    GetPaymentRecipient => ("getPaymentRecipient", "/payment_initiation/recipient/get", ["recipientId"]),
    GetTransactions => ("getTransactions", "/transactions/get", ["accessToken", "startDate", "endDate", "options"]),
    GetWebhookVerificationKey => ("getWebhookVerificationKey", "/webhook_verification_key/get", ["keyId"]),
    ImportItem => ("importItem", "/item/import", ["products", "userAuth", "options"]),
    InvalidateAccessToken => ("invalidateAccessToken", "/item/access_token/invalidate", ["accessToken"]),
    ListPaymentRecipients => ("listPaymentRecipients", "/payment_initiation/recipient/list", []),
    RefreshAssetReport => ("refreshAssetReport", "/asset_report/refresh", ["assetReportToken", "daysRequested", "options"]),
    RefreshTransactions => ("refreshTransactions", "/transactions/refresh", ["accessToken"]),
    RemoveAssetReport => ("removeAssetReport", "/asset_report/remove", ["assetReportToken"]),
    RemoveAuditCopy => ("removeAuditCopy", "/asset_report/audit_copy/remove", ["auditCopyToken"]),
    RemoveItem => ("removeItem", "/item/remove", ["accessToken"]),
    ResetLogin => ("resetLogin", "/sandbox/item/reset_login", ["accessToken"]),
    SandboxItemFireWebhook => ("sandboxItemFireWebhook", "/sandbox/item/fire_webhook", ["accessToken", "webhookCode"]),
    SandboxItemSetVerificationStatus => ("sandboxItemSetVerificationStatus", "/sandbox/item/set_verification_status", ["accessToken", "accountId", "verificationStatus"]),
    SandboxPublicTokenCreate => ("sandboxPublicTokenCreate", "/sandbox/public_token/create", ["institutionId", "initialProducts", "options"]),
    SearchInstitutionsByName => ("searchInstitutionsByName", "/institutions/search", ["query", "products", "options"]),
    UpdateItemWebhook => ("updateItemWebhook", "/item/webhook/update", ["accessToken", "webhook"]),
}
