use serde_json::{Value, json};

use salary_model::CountryChoropleth;

use super::USD_FORMAT;

/// Three layers: ocean sphere, every country as land, then the countries
/// with data coloured by mean salary.
pub(super) fn country_map(map: &CountryChoropleth, geojson_url: &str) -> Value {
    let style = &map.style;
    let values: Vec<Value> = map
        .countries
        .iter()
        .map(|country| {
            json!({
                "iso3": country.iso3,
                "mean_usd": country.mean_usd,
                "intensity": country.intensity,
            })
        })
        .collect();
    let world = json!({
        "url": geojson_url,
        "format": { "type": "json", "property": "features" }
    });

    json!({
        "width": map.width,
        "height": map.height,
        "background": style.background,
        "projection": { "type": "equalEarth" },
        "config": { "view": { "stroke": style.frame } },
        "layer": [
            {
                "data": { "sphere": true },
                "mark": { "type": "geoshape", "fill": style.ocean, "stroke": style.coastline }
            },
            {
                "data": world,
                "mark": { "type": "geoshape", "fill": style.land, "stroke": style.country_border }
            },
            {
                "data": world,
                "transform": [
                    {
                        "lookup": "id",
                        "from": {
                            "data": { "values": values },
                            "key": "iso3",
                            "fields": ["mean_usd", "intensity"]
                        }
                    },
                    { "filter": "isValid(datum.mean_usd)" }
                ],
                "mark": { "type": "geoshape", "stroke": style.country_border },
                "encoding": {
                    "color": {
                        "field": "intensity",
                        "type": "quantitative",
                        "scale": { "scheme": map.color_scale, "domain": [0, 1] },
                        "legend": null
                    },
                    "tooltip": [
                        { "field": "id", "type": "nominal", "title": "Country" },
                        {
                            "field": "mean_usd",
                            "type": "quantitative",
                            "title": format!("Mean salary ({})", map.reference_title),
                            "format": USD_FORMAT
                        }
                    ]
                }
            }
        ]
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use salary_model::{CountryMean, MapTheme};

    #[test]
    fn joins_country_values_by_iso3() {
        let map = CountryChoropleth {
            title: "Average Data Scientist salary by country".to_string(),
            reference_title: "Data Scientist".to_string(),
            color_scale: "reds".to_string(),
            countries: vec![CountryMean {
                iso3: "USA".to_string(),
                mean_usd: 150_000.0,
                intensity: 1.0,
            }],
            style: MapTheme::Light.style(),
            width: 1000,
            height: 750,
        };
        let value = country_map(&map, "world.json");

        assert_eq!(value["background"], "#FFFFFF");
        assert_eq!(value["width"], 1000);
        let data_layer = &value["layer"][2];
        assert_eq!(data_layer["data"]["url"], "world.json");
        let lookup = &data_layer["transform"][0];
        assert_eq!(lookup["from"]["key"], "iso3");
        assert_eq!(lookup["from"]["data"]["values"][0]["iso3"], "USA");
        assert_eq!(data_layer["encoding"]["color"]["scale"]["scheme"], "reds");
        assert_eq!(value["layer"][0]["mark"]["stroke"], "#741C18");
    }
}
