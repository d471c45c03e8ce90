//! Interactive menu shell.
//!
//! Owns the terminal conversation: banner, main menu, per-lookup prompts,
//! error messages, and the pause between screens. All reads and writes go
//! through generic handles so the whole conversation can be driven from
//! tests with in-memory buffers.
//!
//! Menu contract: `1` phone lookup, `2` IP lookup, `0` exit. End of input
//! on the menu prompt behaves like `0`.

use std::io::{self, BufRead, Write};

use colored::Colorize;
use log::debug;

use crate::config::Theme;
use crate::error::LookupError;
use crate::geoip::GeoIpProvider;
use crate::report::{IpReportBuilder, PhoneReportBuilder, ReportRenderer};
use crate::telephony::TelephonyProvider;

const BANNER: &str = "\
╔═══════════════════════════════════════╗\n\
║            MULTIKIT TOOL              ║\n\
║        IP Lookup & Phone Lookup       ║\n\
╚═══════════════════════════════════════╝";

const MENU_FRAME: &str = "\
┌─────────────────────────────────────┐\n\
│              MENÚ PRINCIPAL         │\n\
└─────────────────────────────────────┘";

/// Interactive shell over one telephony provider and one geolocation
/// provider.
pub struct Shell<P, G> {
    theme: Theme,
    renderer: ReportRenderer,
    telephony: P,
    geoip: G,
}

impl<P: TelephonyProvider, G: GeoIpProvider> Shell<P, G> {
    /// Creates a shell with the given theme and providers.
    pub fn new(theme: Theme, telephony: P, geoip: G) -> Self {
        Shell {
            theme,
            renderer: ReportRenderer::new(theme),
            telephony,
            geoip,
        }
    }

    /// Runs the menu loop until the user exits or input ends.
    ///
    /// # Errors
    ///
    /// Only terminal I/O failures surface as errors; lookup failures are
    /// reported to the user and the loop continues.
    pub fn run<R: BufRead, W: Write>(&self, input: R, output: &mut W) -> io::Result<()> {
        let mut lines = input.lines();
        loop {
            self.clear_screen(output)?;
            self.print_banner(output)?;
            self.print_menu(output)?;

            let Some(choice) = read_trimmed(&mut lines)? else {
                self.print_farewell(output)?;
                break;
            };
            debug!("Menu choice: {:?}", choice);

            match choice.as_str() {
                "0" => {
                    self.print_farewell(output)?;
                    break;
                }
                "1" => self.phone_flow(&mut lines, output)?,
                "2" => self.ip_flow(&mut lines, output)?,
                _ => {
                    writeln!(
                        output,
                        "{}",
                        "Opción inválida. Selecciona 0, 1 o 2".color(self.theme.error)
                    )?;
                    self.pause(&mut lines, output)?;
                }
            }
        }
        Ok(())
    }

    fn phone_flow<R: BufRead, W: Write>(
        &self,
        lines: &mut io::Lines<R>,
        output: &mut W,
    ) -> io::Result<()> {
        writeln!(output, "\n{}", "PHONE LOOKUP".color(self.theme.subheader))?;
        writeln!(output, "{}", "=".repeat(30).color(self.theme.rule))?;
        write!(
            output,
            "{}",
            "Ingresa el número de teléfono (ej: +1 (956) 503-7061): ".color(self.theme.prompt)
        )?;
        output.flush()?;

        match read_trimmed(lines)? {
            Some(raw) if !raw.is_empty() => {
                writeln!(
                    output,
                    "\n{}",
                    format!("Analizando número: {}", raw).color(self.theme.notice)
                )?;
                match PhoneReportBuilder::new(&self.telephony).build(&raw) {
                    Ok(report) => write!(output, "\n{}", self.renderer.render(&report))?,
                    Err(error) => self.print_phone_error(output, &error)?,
                }
            }
            _ => writeln!(
                output,
                "{}",
                "Debes ingresar un número válido".color(self.theme.error)
            )?,
        }
        self.pause(lines, output)
    }

    fn ip_flow<R: BufRead, W: Write>(
        &self,
        lines: &mut io::Lines<R>,
        output: &mut W,
    ) -> io::Result<()> {
        writeln!(output, "\n{}", "IP LOOKUP".color(self.theme.subheader))?;
        writeln!(output, "{}", "=".repeat(30).color(self.theme.rule))?;
        write!(
            output,
            "{}",
            "Ingresa la IP a consultar: ".color(self.theme.prompt)
        )?;
        output.flush()?;

        match read_trimmed(lines)? {
            Some(raw) if !raw.is_empty() => {
                writeln!(
                    output,
                    "\n{}",
                    format!("Analizando IP: {}", raw).color(self.theme.notice)
                )?;
                match IpReportBuilder::new(&self.geoip).build(&raw) {
                    Ok(report) => write!(output, "\n{}", self.renderer.render(&report))?,
                    Err(error) => self.print_ip_error(output, &error)?,
                }
            }
            _ => writeln!(
                output,
                "{}",
                "Debes ingresar una IP válida".color(self.theme.error)
            )?,
        }
        self.pause(lines, output)
    }

    fn print_phone_error<W: Write>(&self, output: &mut W, error: &LookupError) -> io::Result<()> {
        let message = match error {
            LookupError::InvalidInput => "Debes ingresar un número válido".to_string(),
            LookupError::Parse { message } => {
                format!("Error al parsear el número: {}", message)
            }
            LookupError::InvalidNumber => "Número de teléfono inválido".to_string(),
            other => format!("Error inesperado: {}", other),
        };
        writeln!(output, "{}", message.color(self.theme.error))
    }

    fn print_ip_error<W: Write>(&self, output: &mut W, error: &LookupError) -> io::Result<()> {
        let message = match error {
            LookupError::InvalidInput => "Debes ingresar una IP válida".to_string(),
            LookupError::Connection(cause) => format!("Error de conexión: {}", cause),
            LookupError::Provider { status } => {
                format!("Error al obtener información de la IP (HTTP {})", status)
            }
            LookupError::Unexpected(message) => format!("Error inesperado: {}", message),
            other => format!("Error inesperado: {}", other),
        };
        writeln!(output, "{}", message.color(self.theme.error))
    }

    fn pause<R: BufRead, W: Write>(
        &self,
        lines: &mut io::Lines<R>,
        output: &mut W,
    ) -> io::Result<()> {
        write!(
            output,
            "\n{}",
            "Presiona Enter para continuar...".color(self.theme.notice)
        )?;
        output.flush()?;
        read_trimmed(lines)?;
        Ok(())
    }

    fn print_banner<W: Write>(&self, output: &mut W) -> io::Result<()> {
        writeln!(output, "{}", BANNER.color(self.theme.banner))
    }

    fn print_menu<W: Write>(&self, output: &mut W) -> io::Result<()> {
        writeln!(output, "\n{}", MENU_FRAME.color(self.theme.menu_frame))?;
        writeln!(output)?;
        writeln!(
            output,
            "{} {}",
            "[1]".color(self.theme.menu_key),
            "Phone Lookup".color(self.theme.menu_text)
        )?;
        writeln!(
            output,
            "{} {}",
            "[2]".color(self.theme.menu_key),
            "IP Lookup".color(self.theme.menu_text)
        )?;
        writeln!(
            output,
            "{} {}",
            "[0]".color(self.theme.menu_key),
            "Salir".color(self.theme.menu_text)
        )?;
        writeln!(output)?;
        write!(output, "{}", "Selecciona una opción: ".color(self.theme.prompt))?;
        output.flush()
    }

    fn print_farewell<W: Write>(&self, output: &mut W) -> io::Result<()> {
        writeln!(output, "\n{}", "¡Hasta luego!".color(self.theme.farewell))
    }

    fn clear_screen<W: Write>(&self, output: &mut W) -> io::Result<()> {
        // ANSI erase-display plus cursor home.
        write!(output, "\x1B[2J\x1B[1;1H")
    }
}

fn read_trimmed<R: BufRead>(lines: &mut io::Lines<R>) -> io::Result<Option<String>> {
    match lines.next() {
        Some(line) => Ok(Some(line?.trim().to_string())),
        None => Ok(None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geoip::IpMetadata;
    use crate::telephony::{NumberType, ParsedPhoneNumber, PhoneNumberFormat};
    use std::io::Cursor;

    struct ScriptedTelephony {
        number: ParsedPhoneNumber,
    }

    impl ScriptedTelephony {
        fn valid_spanish() -> Self {
            ScriptedTelephony {
                number: ParsedPhoneNumber {
                    calling_code: 34,
                    national_number: "912345678".to_string(),
                    region: Some("ES".to_string()),
                    valid: true,
                    possible: true,
                    number_type: NumberType::FixedLine,
                },
            }
        }
    }

    impl TelephonyProvider for ScriptedTelephony {
        fn parse(
            &self,
            raw: &str,
            _default_region: Option<&str>,
        ) -> Result<ParsedPhoneNumber, LookupError> {
            if raw.chars().any(|c| c.is_alphabetic()) {
                return Err(LookupError::Parse {
                    message: "not a number".to_string(),
                });
            }
            Ok(self.number.clone())
        }

        fn format(&self, number: &ParsedPhoneNumber, _format: PhoneNumberFormat) -> String {
            number.e164()
        }

        fn describe_region(&self, _number: &ParsedPhoneNumber, _locale: &str) -> Option<String> {
            Some("España".to_string())
        }

        fn describe_carrier(&self, _number: &ParsedPhoneNumber, _locale: &str) -> Option<String> {
            None
        }

        fn timezones_for(&self, _number: &ParsedPhoneNumber) -> Vec<String> {
            vec!["Europe/Madrid".to_string()]
        }
    }

    struct ScriptedGeoIp {
        result: Result<IpMetadata, u16>,
    }

    impl GeoIpProvider for ScriptedGeoIp {
        fn lookup(&self, _ip: &str) -> Result<IpMetadata, LookupError> {
            match &self.result {
                Ok(metadata) => Ok(metadata.clone()),
                Err(status) => Err(LookupError::Provider { status: *status }),
            }
        }
    }

    fn shell(
        geoip: ScriptedGeoIp,
    ) -> Shell<ScriptedTelephony, ScriptedGeoIp> {
        Shell::new(Theme::default(), ScriptedTelephony::valid_spanish(), geoip)
    }

    fn google_metadata() -> IpMetadata {
        IpMetadata {
            ip: Some("8.8.8.8".to_string()),
            country_name: Some("United States".to_string()),
            org: Some("Google LLC".to_string()),
            ..IpMetadata::default()
        }
    }

    fn run_session(shell: &Shell<ScriptedTelephony, ScriptedGeoIp>, input: &str) -> String {
        colored::control::set_override(false);
        let mut output = Vec::new();
        shell
            .run(Cursor::new(input.as_bytes()), &mut output)
            .unwrap();
        String::from_utf8(output).unwrap()
    }

    #[test]
    fn test_exit_choice_prints_farewell() {
        let shell = shell(ScriptedGeoIp {
            result: Ok(google_metadata()),
        });
        let session = run_session(&shell, "0\n");

        assert!(session.contains("MULTIKIT TOOL"));
        assert!(session.contains("MENÚ PRINCIPAL"));
        assert!(session.contains("[1] Phone Lookup"));
        assert!(session.contains("[2] IP Lookup"));
        assert!(session.contains("[0] Salir"));
        assert!(session.contains("¡Hasta luego!"));
    }

    #[test]
    fn test_end_of_input_behaves_like_exit() {
        let shell = shell(ScriptedGeoIp {
            result: Ok(google_metadata()),
        });
        let session = run_session(&shell, "");
        assert!(session.contains("¡Hasta luego!"));
    }

    #[test]
    fn test_invalid_choice_reports_and_returns_to_menu() {
        let shell = shell(ScriptedGeoIp {
            result: Ok(google_metadata()),
        });
        let session = run_session(&shell, "9\n\n0\n");

        assert!(session.contains("Opción inválida. Selecciona 0, 1 o 2"));
        assert!(session.contains("Presiona Enter para continuar..."));
        assert!(session.contains("¡Hasta luego!"));
    }

    #[test]
    fn test_phone_flow_renders_report() {
        let shell = shell(ScriptedGeoIp {
            result: Ok(google_metadata()),
        });
        let session = run_session(&shell, "1\n+34 912 345 678\n\n0\n");

        assert!(session.contains("PHONE LOOKUP"));
        assert!(session.contains("Analizando número: +34 912 345 678"));
        assert!(session.contains("INFORMACIÓN COMPLETA DEL NÚMERO"));
        assert!(session.contains("País: España"));
        assert!(session.contains("Zona horaria: Europe/Madrid"));
    }

    #[test]
    fn test_phone_flow_parse_failure_message() {
        let shell = shell(ScriptedGeoIp {
            result: Ok(google_metadata()),
        });
        let session = run_session(&shell, "1\nabc\n\n0\n");
        assert!(session.contains("Error al parsear el número: not a number"));
    }

    #[test]
    fn test_phone_flow_empty_input_message() {
        let shell = shell(ScriptedGeoIp {
            result: Ok(google_metadata()),
        });
        let session = run_session(&shell, "1\n\n\n0\n");
        assert!(session.contains("Debes ingresar un número válido"));
    }

    #[test]
    fn test_ip_flow_renders_report() {
        let shell = shell(ScriptedGeoIp {
            result: Ok(google_metadata()),
        });
        let session = run_session(&shell, "2\n8.8.8.8\n\n0\n");

        assert!(session.contains("IP LOOKUP"));
        assert!(session.contains("Analizando IP: 8.8.8.8"));
        assert!(session.contains("INFORMACIÓN COMPLETA DE LA IP"));
        assert!(session.contains("ISP: Google LLC"));
    }

    #[test]
    fn test_ip_flow_provider_error_message() {
        let shell = shell(ScriptedGeoIp { result: Err(429) });
        let session = run_session(&shell, "2\n8.8.8.8\n\n0\n");
        assert!(session.contains("Error al obtener información de la IP (HTTP 429)"));
    }

    #[test]
    fn test_ip_flow_empty_input_message() {
        let shell = shell(ScriptedGeoIp {
            result: Ok(google_metadata()),
        });
        let session = run_session(&shell, "2\n\n\n0\n");
        assert!(session.contains("Debes ingresar una IP válida"));
    }
}
