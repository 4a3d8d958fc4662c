//! Validation helpers for the Objetos domain
//!
//! Pure functions: required-field checks for creation, the at-least-one-
//! contact rule, and the WhatsApp contact format.

use regex::Regex;

use achados_common::{Error, Result};

use crate::domain::entities::DadosCriacao;

lazy_static::lazy_static! {
    /// WhatsApp contact validation regex
    /// Digits with optional +, spaces, hyphens and parentheses; 8-20 chars
    pub static ref CONTATO_WHATSAPP_REGEX: Regex =
        Regex::new(r"^\+?[0-9 ()\-]{8,20}$").unwrap();
}

/// Trim an optional text field, mapping empty results to `None`
pub fn normalizar(valor: Option<String>) -> Option<String> {
    valor
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// Check a required field is non-empty after trimming
fn validar_obrigatorio(nome: &str, valor: &str) -> Result<()> {
    if valor.trim().is_empty() {
        return Err(Error::MissingField(nome.to_string()));
    }
    Ok(())
}

/// Validate that at least one contact method is present (after trimming)
/// and that a WhatsApp contact, when present, looks like a phone number.
pub fn validar_contato(instagram: Option<&str>, whatsapp: Option<&str>) -> Result<()> {
    let instagram = instagram.map(str::trim).filter(|v| !v.is_empty());
    let whatsapp = whatsapp.map(str::trim).filter(|v| !v.is_empty());

    if instagram.is_none() && whatsapp.is_none() {
        return Err(Error::MissingContact);
    }

    if let Some(contato) = whatsapp {
        if !CONTATO_WHATSAPP_REGEX.is_match(contato) {
            return Err(Error::Validation(
                "contato WhatsApp inválido: informe um número de telefone".to_string(),
            ));
        }
    }

    Ok(())
}

/// Validate creation input: required fields plus the contact rule.
/// Side-effect-free.
pub fn validar_criacao(dados: &DadosCriacao) -> Result<()> {
    validar_obrigatorio("titulo", &dados.titulo)?;
    validar_obrigatorio("categoria", &dados.categoria)?;
    validar_obrigatorio("local", &dados.local)?;
    validar_obrigatorio("palavraPasse", &dados.palavra_passe)?;

    validar_contato(
        dados.contato_instagram.as_deref(),
        dados.contato_whatsapp.as_deref(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dados_validos() -> DadosCriacao {
        DadosCriacao {
            titulo: "Garrafa".to_string(),
            categoria: "Utensílios".to_string(),
            descricao: None,
            local: "Biblioteca".to_string(),
            palavra_passe: "segredo".to_string(),
            foto: None,
            contato_instagram: None,
            contato_whatsapp: Some("+55 38 99999-0000".to_string()),
        }
    }

    #[test]
    fn test_validar_criacao_ok() {
        assert!(validar_criacao(&dados_validos()).is_ok());
    }

    #[test]
    fn test_required_fields_checked_in_order() {
        for (campo, mutacao) in [
            ("titulo", Box::new(|d: &mut DadosCriacao| d.titulo.clear()) as Box<dyn Fn(&mut DadosCriacao)>),
            ("categoria", Box::new(|d: &mut DadosCriacao| d.categoria.clear())),
            ("local", Box::new(|d: &mut DadosCriacao| d.local = "  ".to_string())),
            ("palavraPasse", Box::new(|d: &mut DadosCriacao| d.palavra_passe.clear())),
        ] {
            let mut dados = dados_validos();
            mutacao(&mut dados);
            let err = validar_criacao(&dados).unwrap_err();
            assert!(
                matches!(&err, Error::MissingField(nome) if nome == campo),
                "expected MissingField({campo}), got {err:?}"
            );
        }
    }

    #[test]
    fn test_validar_contato_requires_one() {
        assert!(matches!(
            validar_contato(None, None),
            Err(Error::MissingContact)
        ));
        assert!(matches!(
            validar_contato(Some("  "), Some("")),
            Err(Error::MissingContact)
        ));
        assert!(validar_contato(Some("@maria"), None).is_ok());
        assert!(validar_contato(None, Some("38999990000")).is_ok());
    }

    #[test]
    fn test_validar_contato_whatsapp_format() {
        assert!(validar_contato(None, Some("+55 (38) 9999-0000")).is_ok());
        assert!(matches!(
            validar_contato(None, Some("me chame no insta")),
            Err(Error::Validation(_))
        ));
        // Too short
        assert!(matches!(
            validar_contato(None, Some("1234")),
            Err(Error::Validation(_))
        ));
    }

    #[test]
    fn test_normalizar() {
        assert_eq!(normalizar(Some("  @joao  ".to_string())), Some("@joao".to_string()));
        assert_eq!(normalizar(Some("   ".to_string())), None);
        assert_eq!(normalizar(None), None);
    }
}
