mod settings_model;

pub use settings_model::{
    StorefrontSettings, ENV_CURRENCY, ENV_EXCHANGE_RATE, ENV_LOCALE, ENV_SOURCE_CURRENCY,
};
