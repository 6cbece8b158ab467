//! Endpoint bindings, one module per resource.
//!
//! Every endpoint exposes `build_<op>` and `parse_<op>` plus four call
//! shapes built from them:
//!
//! | method | transport | returns |
//! |---|---|---|
//! | `<op>_detailed_blocking` | ureq | `Response<T>` |
//! | `<op>_blocking` | ureq | `Option<T>` |
//! | `<op>_detailed` | reqwest | `Response<T>` |
//! | `<op>` | reqwest | `Option<T>` |

mod api_keys;
mod connectors;
mod pipelines;

pub use api_keys::CreateApiKeyResponse;
pub use pipelines::GetPipelineConfigResponse;
