//! Static airport table: (IATA code, airport name, city, country).
//!
//! Where a city has several airports, the busiest one comes first so that a
//! bare city name resolves to it.

pub const AIRPORTS: &[(&str, &str, &str, &str)] = &[
    // North America
    ("ATL", "Hartsfield-Jackson Atlanta International Airport", "Atlanta", "United States"),
    ("LAX", "Los Angeles International Airport", "Los Angeles", "United States"),
    ("ORD", "O'Hare International Airport", "Chicago", "United States"),
    ("MDW", "Chicago Midway International Airport", "Chicago", "United States"),
    ("DFW", "Dallas/Fort Worth International Airport", "Dallas", "United States"),
    ("DAL", "Dallas Love Field", "Dallas", "United States"),
    ("DEN", "Denver International Airport", "Denver", "United States"),
    ("JFK", "John F. Kennedy International Airport", "New York", "United States"),
    ("LGA", "LaGuardia Airport", "New York", "United States"),
    ("EWR", "Newark Liberty International Airport", "Newark", "United States"),
    ("SFO", "San Francisco International Airport", "San Francisco", "United States"),
    ("OAK", "Oakland International Airport", "Oakland", "United States"),
    ("SJC", "San Jose International Airport", "San Jose", "United States"),
    ("SEA", "Seattle-Tacoma International Airport", "Seattle", "United States"),
    ("LAS", "Harry Reid International Airport", "Las Vegas", "United States"),
    ("MCO", "Orlando International Airport", "Orlando", "United States"),
    ("MIA", "Miami International Airport", "Miami", "United States"),
    ("FLL", "Fort Lauderdale-Hollywood International Airport", "Fort Lauderdale", "United States"),
    ("CLT", "Charlotte Douglas International Airport", "Charlotte", "United States"),
    ("PHX", "Phoenix Sky Harbor International Airport", "Phoenix", "United States"),
    ("IAH", "George Bush Intercontinental Airport", "Houston", "United States"),
    ("HOU", "William P. Hobby Airport", "Houston", "United States"),
    ("BOS", "Boston Logan International Airport", "Boston", "United States"),
    ("MSP", "Minneapolis-Saint Paul International Airport", "Minneapolis", "United States"),
    ("DTW", "Detroit Metropolitan Wayne County Airport", "Detroit", "United States"),
    ("PHL", "Philadelphia International Airport", "Philadelphia", "United States"),
    ("BWI", "Baltimore/Washington International Airport", "Baltimore", "United States"),
    ("IAD", "Washington Dulles International Airport", "Washington", "United States"),
    ("DCA", "Ronald Reagan Washington National Airport", "Washington", "United States"),
    ("SLC", "Salt Lake City International Airport", "Salt Lake City", "United States"),
    ("SAN", "San Diego International Airport", "San Diego", "United States"),
    ("TPA", "Tampa International Airport", "Tampa", "United States"),
    ("PDX", "Portland International Airport", "Portland", "United States"),
    ("STL", "St. Louis Lambert International Airport", "St. Louis", "United States"),
    ("BNA", "Nashville International Airport", "Nashville", "United States"),
    ("AUS", "Austin-Bergstrom International Airport", "Austin", "United States"),
    ("MSY", "Louis Armstrong New Orleans International Airport", "New Orleans", "United States"),
    ("RDU", "Raleigh-Durham International Airport", "Raleigh", "United States"),
    ("SAT", "San Antonio International Airport", "San Antonio", "United States"),
    ("SMF", "Sacramento International Airport", "Sacramento", "United States"),
    ("PIT", "Pittsburgh International Airport", "Pittsburgh", "United States"),
    ("CLE", "Cleveland Hopkins International Airport", "Cleveland", "United States"),
    ("CVG", "Cincinnati/Northern Kentucky International Airport", "Cincinnati", "United States"),
    ("MCI", "Kansas City International Airport", "Kansas City", "United States"),
    ("IND", "Indianapolis International Airport", "Indianapolis", "United States"),
    ("CMH", "John Glenn Columbus International Airport", "Columbus", "United States"),
    ("HNL", "Daniel K. Inouye International Airport", "Honolulu", "United States"),
    ("ANC", "Ted Stevens Anchorage International Airport", "Anchorage", "United States"),
    ("YYZ", "Toronto Pearson International Airport", "Toronto", "Canada"),
    ("YVR", "Vancouver International Airport", "Vancouver", "Canada"),
    ("YUL", "Montreal-Trudeau International Airport", "Montreal", "Canada"),
    ("YYC", "Calgary International Airport", "Calgary", "Canada"),
    ("YOW", "Ottawa Macdonald-Cartier International Airport", "Ottawa", "Canada"),
    ("MEX", "Mexico City International Airport", "Mexico City", "Mexico"),
    ("CUN", "Cancun International Airport", "Cancun", "Mexico"),
    ("GDL", "Guadalajara International Airport", "Guadalajara", "Mexico"),
    // South America & Caribbean
    ("GRU", "Sao Paulo/Guarulhos International Airport", "Sao Paulo", "Brazil"),
    ("GIG", "Rio de Janeiro/Galeao International Airport", "Rio de Janeiro", "Brazil"),
    ("EZE", "Ministro Pistarini International Airport", "Buenos Aires", "Argentina"),
    ("BOG", "El Dorado International Airport", "Bogota", "Colombia"),
    ("LIM", "Jorge Chavez International Airport", "Lima", "Peru"),
    ("SCL", "Arturo Merino Benitez International Airport", "Santiago", "Chile"),
    ("PTY", "Tocumen International Airport", "Panama City", "Panama"),
    ("SJU", "Luis Munoz Marin International Airport", "San Juan", "Puerto Rico"),
    ("HAV", "Jose Marti International Airport", "Havana", "Cuba"),
    // Europe
    ("LHR", "Heathrow Airport", "London", "United Kingdom"),
    ("LGW", "Gatwick Airport", "London", "United Kingdom"),
    ("STN", "Stansted Airport", "London", "United Kingdom"),
    ("LTN", "Luton Airport", "London", "United Kingdom"),
    ("LCY", "London City Airport", "London", "United Kingdom"),
    ("MAN", "Manchester Airport", "Manchester", "United Kingdom"),
    ("EDI", "Edinburgh Airport", "Edinburgh", "United Kingdom"),
    ("DUB", "Dublin Airport", "Dublin", "Ireland"),
    ("CDG", "Charles de Gaulle Airport", "Paris", "France"),
    ("ORY", "Paris Orly Airport", "Paris", "France"),
    ("NCE", "Nice Cote d'Azur Airport", "Nice", "France"),
    ("LYS", "Lyon-Saint Exupery Airport", "Lyon", "France"),
    ("AMS", "Amsterdam Airport Schiphol", "Amsterdam", "Netherlands"),
    ("BRU", "Brussels Airport", "Brussels", "Belgium"),
    ("FRA", "Frankfurt Airport", "Frankfurt", "Germany"),
    ("MUC", "Munich Airport", "Munich", "Germany"),
    ("BER", "Berlin Brandenburg Airport", "Berlin", "Germany"),
    ("HAM", "Hamburg Airport", "Hamburg", "Germany"),
    ("DUS", "Dusseldorf Airport", "Dusseldorf", "Germany"),
    ("ZRH", "Zurich Airport", "Zurich", "Switzerland"),
    ("GVA", "Geneva Airport", "Geneva", "Switzerland"),
    ("VIE", "Vienna International Airport", "Vienna", "Austria"),
    ("MAD", "Adolfo Suarez Madrid-Barajas Airport", "Madrid", "Spain"),
    ("BCN", "Josep Tarradellas Barcelona-El Prat Airport", "Barcelona", "Spain"),
    ("PMI", "Palma de Mallorca Airport", "Palma", "Spain"),
    ("AGP", "Malaga Airport", "Malaga", "Spain"),
    ("LIS", "Humberto Delgado Airport", "Lisbon", "Portugal"),
    ("OPO", "Francisco Sa Carneiro Airport", "Porto", "Portugal"),
    ("FCO", "Leonardo da Vinci-Fiumicino Airport", "Rome", "Italy"),
    ("MXP", "Milan Malpensa Airport", "Milan", "Italy"),
    ("LIN", "Milan Linate Airport", "Milan", "Italy"),
    ("VCE", "Venice Marco Polo Airport", "Venice", "Italy"),
    ("NAP", "Naples International Airport", "Naples", "Italy"),
    ("ATH", "Athens International Airport", "Athens", "Greece"),
    ("IST", "Istanbul Airport", "Istanbul", "Turkey"),
    ("SAW", "Sabiha Gokcen International Airport", "Istanbul", "Turkey"),
    ("CPH", "Copenhagen Airport", "Copenhagen", "Denmark"),
    ("ARN", "Stockholm Arlanda Airport", "Stockholm", "Sweden"),
    ("OSL", "Oslo Gardermoen Airport", "Oslo", "Norway"),
    ("HEL", "Helsinki-Vantaa Airport", "Helsinki", "Finland"),
    ("KEF", "Keflavik International Airport", "Reykjavik", "Iceland"),
    ("WAW", "Warsaw Chopin Airport", "Warsaw", "Poland"),
    ("PRG", "Vaclav Havel Airport Prague", "Prague", "Czech Republic"),
    ("BUD", "Budapest Ferenc Liszt International Airport", "Budapest", "Hungary"),
    ("OTP", "Henri Coanda International Airport", "Bucharest", "Romania"),
    ("SVO", "Sheremetyevo International Airport", "Moscow", "Russia"),
    ("KBP", "Boryspil International Airport", "Kyiv", "Ukraine"),
    // Middle East & Africa
    ("DXB", "Dubai International Airport", "Dubai", "United Arab Emirates"),
    ("AUH", "Zayed International Airport", "Abu Dhabi", "United Arab Emirates"),
    ("DOH", "Hamad International Airport", "Doha", "Qatar"),
    ("RUH", "King Khalid International Airport", "Riyadh", "Saudi Arabia"),
    ("JED", "King Abdulaziz International Airport", "Jeddah", "Saudi Arabia"),
    ("TLV", "Ben Gurion Airport", "Tel Aviv", "Israel"),
    ("AMM", "Queen Alia International Airport", "Amman", "Jordan"),
    ("CAI", "Cairo International Airport", "Cairo", "Egypt"),
    ("CMN", "Mohammed V International Airport", "Casablanca", "Morocco"),
    ("RAK", "Marrakesh Menara Airport", "Marrakesh", "Morocco"),
    ("ADD", "Addis Ababa Bole International Airport", "Addis Ababa", "Ethiopia"),
    ("NBO", "Jomo Kenyatta International Airport", "Nairobi", "Kenya"),
    ("LOS", "Murtala Muhammed International Airport", "Lagos", "Nigeria"),
    ("JNB", "O. R. Tambo International Airport", "Johannesburg", "South Africa"),
    ("CPT", "Cape Town International Airport", "Cape Town", "South Africa"),
    // Asia
    ("HND", "Tokyo Haneda Airport", "Tokyo", "Japan"),
    ("NRT", "Narita International Airport", "Tokyo", "Japan"),
    ("KIX", "Kansai International Airport", "Osaka", "Japan"),
    ("ICN", "Incheon International Airport", "Seoul", "South Korea"),
    ("GMP", "Gimpo International Airport", "Seoul", "South Korea"),
    ("PEK", "Beijing Capital International Airport", "Beijing", "China"),
    ("PKX", "Beijing Daxing International Airport", "Beijing", "China"),
    ("PVG", "Shanghai Pudong International Airport", "Shanghai", "China"),
    ("SHA", "Shanghai Hongqiao International Airport", "Shanghai", "China"),
    ("CAN", "Guangzhou Baiyun International Airport", "Guangzhou", "China"),
    ("SZX", "Shenzhen Bao'an International Airport", "Shenzhen", "China"),
    ("HKG", "Hong Kong International Airport", "Hong Kong", "Hong Kong"),
    ("TPE", "Taiwan Taoyuan International Airport", "Taipei", "Taiwan"),
    ("MNL", "Ninoy Aquino International Airport", "Manila", "Philippines"),
    ("SIN", "Singapore Changi Airport", "Singapore", "Singapore"),
    ("KUL", "Kuala Lumpur International Airport", "Kuala Lumpur", "Malaysia"),
    ("BKK", "Suvarnabhumi Airport", "Bangkok", "Thailand"),
    ("DMK", "Don Mueang International Airport", "Bangkok", "Thailand"),
    ("HKT", "Phuket International Airport", "Phuket", "Thailand"),
    ("CGK", "Soekarno-Hatta International Airport", "Jakarta", "Indonesia"),
    ("DPS", "Ngurah Rai International Airport", "Denpasar", "Indonesia"),
    ("SGN", "Tan Son Nhat International Airport", "Ho Chi Minh City", "Vietnam"),
    ("HAN", "Noi Bai International Airport", "Hanoi", "Vietnam"),
    ("DEL", "Indira Gandhi International Airport", "Delhi", "India"),
    ("BOM", "Chhatrapati Shivaji Maharaj International Airport", "Mumbai", "India"),
    ("BLR", "Kempegowda International Airport", "Bangalore", "India"),
    ("MAA", "Chennai International Airport", "Chennai", "India"),
    ("CCU", "Netaji Subhas Chandra Bose International Airport", "Kolkata", "India"),
    ("HYD", "Rajiv Gandhi International Airport", "Hyderabad", "India"),
    ("CMB", "Bandaranaike International Airport", "Colombo", "Sri Lanka"),
    ("KTM", "Tribhuvan International Airport", "Kathmandu", "Nepal"),
    ("KHI", "Jinnah International Airport", "Karachi", "Pakistan"),
    ("DAC", "Hazrat Shahjalal International Airport", "Dhaka", "Bangladesh"),
    // Oceania
    ("SYD", "Sydney Kingsford Smith Airport", "Sydney", "Australia"),
    ("MEL", "Melbourne Airport", "Melbourne", "Australia"),
    ("BNE", "Brisbane Airport", "Brisbane", "Australia"),
    ("PER", "Perth Airport", "Perth", "Australia"),
    ("ADL", "Adelaide Airport", "Adelaide", "Australia"),
    ("AKL", "Auckland Airport", "Auckland", "New Zealand"),
    ("CHC", "Christchurch Airport", "Christchurch", "New Zealand"),
    ("NAN", "Nadi International Airport", "Nadi", "Fiji"),
];
