use crate::model::PropertyType;

/// Brands stocked for each type of equipment.
#[must_use]
pub fn brands(property_type: PropertyType) -> &'static [&'static str; 5] {
    match property_type {
        PropertyType::Monitor => &["Dell", "HP", "LG", "Samsung", "Acer"],
        PropertyType::Keyboard | PropertyType::Mouse => {
            &["Logitech", "Microsoft", "Corsair", "Razer", "HyperX"]
        }
        PropertyType::Fan => &["Havells", "Usha", "Orient", "Crompton", "Bajaj"],
        PropertyType::Light => &["Philips", "Havells", "Syska", "Wipro", "Osram"],
        PropertyType::WifiRouter => &["TP-Link", "Netgear", "Cisco", "D-Link", "Asus"],
        PropertyType::Ac => &["LG", "Samsung", "Voltas", "Blue Star", "Daikin"],
    }
}

/// Model names stocked for each type of equipment.
#[must_use]
pub fn models(property_type: PropertyType) -> &'static [&'static str; 5] {
    match property_type {
        PropertyType::Monitor => &["P2419H", "V24", "UltraGear", "Odyssey G5", "Nitro"],
        PropertyType::Keyboard => &["K120", "Wireless 900", "K55", "BlackWidow", "Alloy Core"],
        PropertyType::Mouse => &["M185", "Wireless 1850", "Harpoon", "DeathAdder", "Pulsefire"],
        PropertyType::Fan => &["Swing", "Aerostorm", "Airflow", "Aura", "Midea"],
        PropertyType::Light => &["TrueValue", "LED Pro", "Smart Bulb", "Garnet", "LEDTube"],
        PropertyType::WifiRouter => &[
            "Archer C6",
            "Nighthawk",
            "Linksys E5600",
            "DIR-815",
            "RT-AC53",
        ],
        PropertyType::Ac => &[
            "Dual Inverter",
            "WindFree",
            "Fresh Air",
            "Inverter 5 Star",
            "Room AC",
        ],
    }
}
