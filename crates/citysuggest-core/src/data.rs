// crates/citysuggest-core/src/data.rs

/// Built-in catalog of popular cities, in display order.
pub static POPULAR_CITIES: &[&str] = &[
    // Spain
    "Madrid, España",
    "Barcelona, España",
    "Valencia, España",
    "Sevilla, España",
    "Zaragoza, España",
    "Málaga, España",
    "Murcia, España",
    "Palma, España",
    "Las Palmas, España",
    "Bilbao, España",

    // Latin America
    "Buenos Aires, Argentina",
    "Ciudad de México, México",
    "Bogotá, Colombia",
    "Lima, Perú",
    "Santiago, Chile",
    "Caracas, Venezuela",
    "Quito, Ecuador",
    "La Paz, Bolivia",
    "Montevideo, Uruguay",
    "Asunción, Paraguay",
    "San José, Costa Rica",
    "Panamá, Panamá",
    "Guatemala, Guatemala",
    "Tegucigalpa, Honduras",
    "San Salvador, El Salvador",
    "Managua, Nicaragua",

    // United States
    "Nueva York, Estados Unidos",
    "Los Ángeles, Estados Unidos",
    "Chicago, Estados Unidos",
    "Houston, Estados Unidos",
    "Phoenix, Estados Unidos",
    "Philadelphia, Estados Unidos",
    "San Antonio, Estados Unidos",
    "San Diego, Estados Unidos",
    "Dallas, Estados Unidos",
    "Miami, Estados Unidos",
    "Las Vegas, Estados Unidos",
    "Boston, Estados Unidos",

    // Europe
    "Londres, Reino Unido",
    "París, Francia",
    "Berlín, Alemania",
    "Roma, Italia",
    "Amsterdam, Países Bajos",
    "Viena, Austria",
    "Praga, República Checa",
    "Estocolmo, Suecia",
    "Oslo, Noruega",
    "Copenhague, Dinamarca",
    "Helsinki, Finlandia",
    "Varsovia, Polonia",
    "Budapest, Hungría",
    "Atenas, Grecia",
    "Lisboa, Portugal",
    "Dublín, Irlanda",
    "Bruselas, Bélgica",

    // Asia
    "Tokio, Japón",
    "Pekín, China",
    "Shanghái, China",
    "Mumbai, India",
    "Delhi, India",
    "Seúl, Corea del Sur",
    "Bangkok, Tailandia",
    "Singapur",
    "Kuala Lumpur, Malasia",
    "Jakarta, Indonesia",
    "Manila, Filipinas",
    "Ho Chi Minh, Vietnam",

    // Africa
    "El Cairo, Egipto",
    "Lagos, Nigeria",
    "Casablanca, Marruecos",
    "Ciudad del Cabo, Sudáfrica",
    "Nairobi, Kenia",
    "Accra, Ghana",
    "Túnez, Túnez",
    "Argel, Argelia",

    // Oceania
    "Sídney, Australia",
    "Melbourne, Australia",
    "Brisbane, Australia",
    "Perth, Australia",
    "Auckland, Nueva Zelanda",
    "Wellington, Nueva Zelanda",
];
