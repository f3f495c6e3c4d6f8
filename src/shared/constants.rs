/// Download name of the people list export
pub const PERSON_EXPORT_FILENAME: &str = "data-penduduk.csv";

/// Header row of the people list export
pub const PERSON_EXPORT_HEADERS: [&str; 15] = [
    "No",
    "NIK",
    "Nama",
    "Provinsi",
    "Kabupaten",
    "Kecamatan",
    "Alamat",
    "Telp/HP",
    "Email",
    "Tgl Lahir",
    "Usia",
    "Pendapatan",
    "Pendidikan",
    "Pekerjaan",
    "Keterangan",
];

/// Display name used when a region code has no reference row
pub const UNKNOWN_REGION_NAME: &str = "Unknown";
