use crate::modules::provider::domain::ReverseLocation;

use super::dto::HereItem;

pub struct HereMapper;

impl HereMapper {
    /// Admin fallback chains: admin1 = state, else province; admin2 =
    /// city, else county; admin3 = district, else subdistrict.
    pub fn to_location(item: &HereItem) -> ReverseLocation {
        let address = &item.address;
        ReverseLocation {
            address: item.title.clone(),
            admin1: Self::pick(&address.state, &address.province),
            admin2: Self::pick(&address.city, &address.county),
            admin3: Self::pick(&address.district, &address.subdistrict),
        }
    }

    fn pick(primary: &Option<String>, fallback: &Option<String>) -> String {
        primary
            .as_deref()
            .filter(|value| !value.is_empty())
            .or_else(|| fallback.as_deref().filter(|value| !value.is_empty()))
            .unwrap_or_default()
            .to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::provider::infrastructure::adapters::here::dto::HereAddress;

    #[test]
    fn primary_fields_win() {
        let item = HereItem {
            title: "Somewhere".to_string(),
            position: None,
            address: HereAddress {
                state: Some("Beijing Shi".to_string()),
                province: Some("ignored".to_string()),
                city: Some("Beijing".to_string()),
                county: None,
                district: Some("Chaoyang".to_string()),
                subdistrict: None,
            },
        };

        let location = HereMapper::to_location(&item);
        assert_eq!(location.address, "Somewhere");
        assert_eq!(location.admin1, "Beijing Shi");
        assert_eq!(location.admin2, "Beijing");
        assert_eq!(location.admin3, "Chaoyang");
    }

    #[test]
    fn alternate_fields_fill_gaps() {
        let item = HereItem {
            title: String::new(),
            position: None,
            address: HereAddress {
                state: None,
                province: Some("Taiwan".to_string()),
                city: None,
                county: Some("Hsinchu County".to_string()),
                district: None,
                subdistrict: Some("Zhubei".to_string()),
            },
        };

        let location = HereMapper::to_location(&item);
        assert_eq!(location.admin1, "Taiwan");
        assert_eq!(location.admin2, "Hsinchu County");
        assert_eq!(location.admin3, "Zhubei");
    }

    #[test]
    fn missing_levels_stay_blank() {
        let location = HereMapper::to_location(&HereItem::default());
        assert_eq!(location.admin1, "");
        assert_eq!(location.admin2, "");
        assert_eq!(location.admin3, "");
    }
}
