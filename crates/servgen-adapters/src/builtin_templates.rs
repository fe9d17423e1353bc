//! Built-in template content.
//!
//! The two stubs Servgen emits are constants baked into the binary. Their
//! text is written verbatim into the target folder; nothing is substituted
//! per invocation, and the service name never appears in a body.
//!
//! The stubs target the consuming front-end project: `service.ts` performs
//! the HTTP call (axios), `utils.ts` inspects the response and drives the
//! toaster notifications. Servgen never executes this code — it only emits
//! the literal text. The unused `import { base }` line in `service.ts` is
//! part of the fixed content and stays as-is.

use tracing::debug;

use servgen_core::domain::TemplateFile;

/// Filename of the network-call stub.
pub const SERVICE_FILENAME: &str = "service.ts";

/// Filename of the response-handling-utilities stub.
pub const UTILS_FILENAME: &str = "utils.ts";

const SERVICE_CONTENT: &str = r#"import axios from 'axios'
import { base } from '../routes'

export const getThis = async (country: string) => {
  const baseUrl: string = `https://restcountries.com/v3.1/name/${country}`
  const res = await axios.get(baseUrl).catch((error) => error.response)
  return res
}
"#;

const UTILS_CONTENT: &str = r#"import { AxiosResponse } from 'axios'
import { toaster } from 'ui-sora'
import { GetCountryResponse, StatusCode } from '../../types'

/******************************************************************************
 * Check if the response passed is considered successful.
 * @param {AxiosResponse<GetCountryResponse>} res the response of the API
 * @returns boolean true if response is accepted as successful
 *****************************************************************************/
export const isSuccessful = (res: AxiosResponse<GetCountryResponse>) => {
  const statusExpected = 200
  const matchesExpected = (param: GetCountryResponse) => {
    return param as GetCountryResponse
  }
  return res.status === statusExpected && matchesExpected(res.data)
}

/******************************************************************************
 * @param {AxiosResponse<GetCountryResponse>} res the response of the API
 * @returns triggers a toaster notification
 *****************************************************************************/
export const handleSuccess = (res: AxiosResponse<GetCountryResponse>) => {
  const title =
    (res.data && res.data[0] && res.data[0].region) || 'Fallbacktitle'
  const description =
    (res.data[0] && res.data[0].name && res.data[0].name.common) ||
    'Fallback description'
  toaster.success(title, { description: description })
}

/******************************************************************************
 * @param {AxiosResponse<GetCountryResponse>} res the response of the API
 * @returns triggers a danger toaster notification and logs error
 *****************************************************************************/
export const handleFail = (res: AxiosResponse<GetCountryResponse>) => {
  if (res.status && res.status === 404) {
    toaster.danger('My custom not found message')
    console.error({ myCustomField: 'My tip', ...res })
  } else {
    toaster.danger('General error message')
  }
}

/******************************************************************************
 * @param {AxiosResponse<GetCountryResponse>} res the response of the API
 * @param {statusCode} number status code of the response
 * @param {formatIsExpected} function the validator of the response format
 * @returns bolean true if the response is as expected
 *****************************************************************************/
export const responseIsExpected = (
  res: AxiosResponse<GetCountryResponse>,
  statusCode: StatusCode,
  formatIsExpected: (params: unknown) => boolean // will be use case specific
) => {
  return res.status && res.status === statusCode && formatIsExpected(res)
}
"#;

/// The network-call stub.
pub fn service_template() -> TemplateFile {
    TemplateFile::new(SERVICE_FILENAME, SERVICE_CONTENT)
}

/// The response-handling-utilities stub.
pub fn utils_template() -> TemplateFile {
    TemplateFile::new(UTILS_FILENAME, UTILS_CONTENT)
}

/// All built-in templates, in emit order.
pub fn all_templates() -> Vec<TemplateFile> {
    let templates = vec![service_template(), utils_template()];
    debug!(count = templates.len(), "Loaded built-in templates");
    templates
}

// ── tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exactly_two_templates_in_emit_order() {
        let templates = all_templates();
        let names: Vec<&str> = templates.iter().map(|t| t.filename.as_str()).collect();
        assert_eq!(names, [SERVICE_FILENAME, UTILS_FILENAME]);
    }

    #[test]
    fn service_stub_calls_restcountries() {
        let t = service_template();
        assert!(t.content.starts_with("import axios from 'axios'"));
        assert!(
            t.content
                .contains("https://restcountries.com/v3.1/name/${country}")
        );
        assert!(t.content.contains("catch((error) => error.response)"));
    }

    #[test]
    fn utils_stub_exports_all_four_helpers() {
        let content = utils_template().content;
        for export in [
            "export const isSuccessful",
            "export const handleSuccess",
            "export const handleFail",
            "export const responseIsExpected",
        ] {
            assert!(content.contains(export), "missing: {export}");
        }
    }

    #[test]
    fn utils_stub_special_cases_404() {
        let content = utils_template().content;
        assert!(content.contains("res.status === 404"));
        assert!(content.contains("'My custom not found message'"));
        assert!(content.contains("'General error message'"));
    }

    #[test]
    fn content_is_not_parameterized() {
        // Repeated calls hand out identical text; no interpolation hooks.
        assert_eq!(service_template(), service_template());
        assert_eq!(utils_template(), utils_template());
        assert!(!service_template().content.contains("{{"));
    }

    #[test]
    fn bodies_end_with_a_newline() {
        assert!(service_template().content.ends_with('\n'));
        assert!(utils_template().content.ends_with('\n'));
    }
}
