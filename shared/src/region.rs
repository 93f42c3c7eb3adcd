// Brazilian federative units. The food-basket reference table is keyed by these.
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Region {
    #[serde(rename = "AC")]
    Acre,
    #[serde(rename = "AL")]
    Alagoas,
    #[serde(rename = "AP")]
    Amapa,
    #[serde(rename = "AM")]
    Amazonas,
    #[serde(rename = "BA")]
    Bahia,
    #[serde(rename = "CE")]
    Ceara,
    #[serde(rename = "DF")]
    DistritoFederal,
    #[serde(rename = "ES")]
    EspiritoSanto,
    #[serde(rename = "GO")]
    Goias,
    #[serde(rename = "MA")]
    Maranhao,
    #[serde(rename = "MT")]
    MatoGrosso,
    #[serde(rename = "MS")]
    MatoGrossoDoSul,
    #[serde(rename = "MG")]
    MinasGerais,
    #[serde(rename = "PA")]
    Para,
    #[serde(rename = "PB")]
    Paraiba,
    #[serde(rename = "PR")]
    Parana,
    #[serde(rename = "PE")]
    Pernambuco,
    #[serde(rename = "PI")]
    Piaui,
    #[serde(rename = "RJ")]
    RioDeJaneiro,
    #[serde(rename = "RN")]
    RioGrandeDoNorte,
    #[serde(rename = "RS")]
    RioGrandeDoSul,
    #[serde(rename = "RO")]
    Rondonia,
    #[serde(rename = "RR")]
    Roraima,
    #[serde(rename = "SC")]
    SantaCatarina,
    #[serde(rename = "SP")]
    SaoPaulo,
    #[serde(rename = "SE")]
    Sergipe,
    #[serde(rename = "TO")]
    Tocantins,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Unknown region code: '{0}'")]
pub struct UnknownRegion(pub String);

impl Region {
    /// All 27 units, in the order they are listed in pickers.
    pub const ALL: [Region; 27] = [
        Region::Acre,
        Region::Alagoas,
        Region::Amapa,
        Region::Amazonas,
        Region::Bahia,
        Region::Ceara,
        Region::DistritoFederal,
        Region::EspiritoSanto,
        Region::Goias,
        Region::Maranhao,
        Region::MatoGrosso,
        Region::MatoGrossoDoSul,
        Region::MinasGerais,
        Region::Para,
        Region::Paraiba,
        Region::Parana,
        Region::Pernambuco,
        Region::Piaui,
        Region::RioDeJaneiro,
        Region::RioGrandeDoNorte,
        Region::RioGrandeDoSul,
        Region::Rondonia,
        Region::Roraima,
        Region::SantaCatarina,
        Region::SaoPaulo,
        Region::Sergipe,
        Region::Tocantins,
    ];

    pub fn code(&self) -> &'static str {
        match self {
            Region::Acre => "AC",
            Region::Alagoas => "AL",
            Region::Amapa => "AP",
            Region::Amazonas => "AM",
            Region::Bahia => "BA",
            Region::Ceara => "CE",
            Region::DistritoFederal => "DF",
            Region::EspiritoSanto => "ES",
            Region::Goias => "GO",
            Region::Maranhao => "MA",
            Region::MatoGrosso => "MT",
            Region::MatoGrossoDoSul => "MS",
            Region::MinasGerais => "MG",
            Region::Para => "PA",
            Region::Paraiba => "PB",
            Region::Parana => "PR",
            Region::Pernambuco => "PE",
            Region::Piaui => "PI",
            Region::RioDeJaneiro => "RJ",
            Region::RioGrandeDoNorte => "RN",
            Region::RioGrandeDoSul => "RS",
            Region::Rondonia => "RO",
            Region::Roraima => "RR",
            Region::SantaCatarina => "SC",
            Region::SaoPaulo => "SP",
            Region::Sergipe => "SE",
            Region::Tocantins => "TO",
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Region::Acre => "Acre",
            Region::Alagoas => "Alagoas",
            Region::Amapa => "Amapá",
            Region::Amazonas => "Amazonas",
            Region::Bahia => "Bahia",
            Region::Ceara => "Ceará",
            Region::DistritoFederal => "Distrito Federal",
            Region::EspiritoSanto => "Espírito Santo",
            Region::Goias => "Goiás",
            Region::Maranhao => "Maranhão",
            Region::MatoGrosso => "Mato Grosso",
            Region::MatoGrossoDoSul => "Mato Grosso do Sul",
            Region::MinasGerais => "Minas Gerais",
            Region::Para => "Pará",
            Region::Paraiba => "Paraíba",
            Region::Parana => "Paraná",
            Region::Pernambuco => "Pernambuco",
            Region::Piaui => "Piauí",
            Region::RioDeJaneiro => "Rio de Janeiro",
            Region::RioGrandeDoNorte => "Rio Grande do Norte",
            Region::RioGrandeDoSul => "Rio Grande do Sul",
            Region::Rondonia => "Rondônia",
            Region::Roraima => "Roraima",
            Region::SantaCatarina => "Santa Catarina",
            Region::SaoPaulo => "São Paulo",
            Region::Sergipe => "Sergipe",
            Region::Tocantins => "Tocantins",
        }
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

impl FromStr for Region {
    type Err = UnknownRegion;

    // Codes only ("sp", " SP "); display names are matched by the GUI picker.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let code = s.trim().to_ascii_uppercase();
        Region::ALL
            .iter()
            .copied()
            .find(|region| region.code() == code)
            .ok_or_else(|| UnknownRegion(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_parse_code_case_insensitive() {
        assert_eq!("SP".parse::<Region>().unwrap(), Region::SaoPaulo);
        assert_eq!(" rj ".parse::<Region>().unwrap(), Region::RioDeJaneiro);
    }

    #[test]
    fn test_parse_unknown_code() {
        let err = "XX".parse::<Region>().unwrap_err();
        assert_eq!(err, UnknownRegion("XX".to_string()));
        assert!("".parse::<Region>().is_err());
    }

    #[test]
    fn test_codes_are_unique_and_round_trip() {
        let codes: HashSet<&str> = Region::ALL.iter().map(|r| r.code()).collect();
        assert_eq!(codes.len(), 27);
        for region in Region::ALL {
            assert_eq!(region.code().parse::<Region>().unwrap(), region);
        }
    }

    #[test]
    fn test_serde_uses_code() {
        let json = serde_json::to_string(&Region::DistritoFederal).unwrap();
        assert_eq!(json, "\"DF\"");
        let back: Region = serde_json::from_str("\"MG\"").unwrap();
        assert_eq!(back, Region::MinasGerais);
    }
}
